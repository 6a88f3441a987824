use chrono::{DateTime, Utc};

/// Elemental type taxonomy. Closed set — the store only ever holds one of
/// these 18 two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeciesKind {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl SpeciesKind {
    pub const ALL: [SpeciesKind; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Two-letter code stored in the `value` column.
    pub fn code(self) -> &'static str {
        match self {
            Self::Normal => "NO",
            Self::Fire => "FI",
            Self::Water => "WA",
            Self::Electric => "EL",
            Self::Grass => "GR",
            Self::Ice => "IC",
            Self::Fighting => "FG",
            Self::Poison => "PO",
            Self::Ground => "GD",
            Self::Flying => "FL",
            Self::Psychic => "PS",
            Self::Bug => "BG",
            Self::Rock => "RK",
            Self::Ghost => "GH",
            Self::Dragon => "DR",
            Self::Dark => "DK",
            Self::Steel => "ST",
            Self::Fairy => "FA",
        }
    }

    /// Human-readable label, also the seeded species name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Electric => "Electric",
            Self::Grass => "Grass",
            Self::Ice => "Ice",
            Self::Fighting => "Fighting",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Flying => "Flying",
            Self::Psychic => "Psychic",
            Self::Bug => "Bug",
            Self::Rock => "Rock",
            Self::Ghost => "Ghost",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Steel => "Steel",
            Self::Fairy => "Fairy",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.code() == code)
    }
}

/// Species taxonomy entry. Seeded once, never mutated by API traffic.
#[derive(Debug, Clone)]
pub struct Species {
    pub id: i32,
    pub name: String,
    pub kind: SpeciesKind,
    pub created_at: DateTime<Utc>,
}

/// Playable character belonging to exactly one species.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub strength: i32,
    pub species_id: i32,
}

/// Registered account. `password_hash` never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new account; the hash is computed before this is built.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}
