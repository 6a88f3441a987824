//! sea-orm entity definitions for the Pokédex API tables.

pub mod characters;
pub mod species;
pub mod users;
