pub mod cascade;
pub mod health;
pub mod index;
