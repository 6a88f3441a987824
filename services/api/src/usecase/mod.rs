pub mod auth;
pub mod character;
pub mod species;
pub mod user;
