//! Common infrastructure for the Quill markup engine.
//!
//! This crate provides the pieces shared by every Quill component:
//! - **Errors** - the [`MarkupError`] contract-violation type
//! - **Warning System** - deduplicated, colored terminal output

/// Contract-violation errors returned by lookups and constructors.
pub mod error;
/// Deduplicated warnings on stderr.
pub mod warning;

pub use error::MarkupError;
