//! Build-time generator for icon atlas lookup tables.
//!
//! A sprite packer lays icons out in a square atlas and writes a manifest of
//! names and pixel positions. This crate turns that manifest into Rust source:
//! an enum with one variant per icon and a parallel table of unit texture
//! coordinates.
//!
//! Stages run strictly in order: [`manifest`] → [`naming`] → [`coords`] →
//! [`order`] → [`emit`]. [`pipeline`] drives them from a [`config::Config`].

pub mod config;
pub mod coords;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod order;
pub mod packer;
pub mod pipeline;

pub use config::Config;
pub use error::AtlasError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
