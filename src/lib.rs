//! locswap - bidirectional localization transforms for component sources
//!
//! The forward path extracts human-readable literals from a component file,
//! derives stable keys, translates them, emits table fragments for both
//! locales and rewrites the literals into accessor calls. The reverse path
//! replaces accessor calls with text from a static table and removes the
//! accessor import and binding.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, key derivation, translation, tables and rewriting
//! - `utils`: Shared text helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
