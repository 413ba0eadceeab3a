//! Core transformation pipeline.
//!
//! ```text
//! forward:  source → extract → derive keys → translate → emit tables
//!                                                      → rewrite literals to calls
//! reverse:  source + static table → rewrite calls to literals
//! ```
//!
//! - [`extract`]: quoted-run tokenizer and prose filter
//! - [`key`]: deterministic key derivation
//! - [`translate`]: live providers and the static lookup table
//! - [`table`]: translation sets and fragment emission
//! - [`rewrite`]: forward and reverse source rewriting
//! - [`source_file`]: backup-then-write commits
//! - [`file_scanner`]: input path expansion

pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod rewrite;
pub mod source_file;
pub mod table;
pub mod translate;

pub use extract::{ExtractOptions, ExtractedString, LiteralExtractor};
pub use key::TranslationKey;
pub use rewrite::{AccessorConfig, ForwardRewriter, ReverseRewriter};
pub use source_file::{CommitOutcome, SourceFile};
pub use table::{TableFormat, TranslationSet};
