//! Domain types, errors, and pure helpers shared by the db and api crates.

pub mod error;
pub mod qr;
pub mod types;
pub mod uploads;
