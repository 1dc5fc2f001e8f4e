//! Template subsystem.
//!
//! # Data Flow
//! ```text
//! HTML source (inline or fetched)
//!     → engine.rs (single-pass {{ name }} substitution)
//!     → rendered fragment (string)
//! ```
//!
//! # Design Decisions
//! - Substitution is a single regex pass: values containing placeholder
//!   syntax are never re-expanded
//! - Missing variables leave the literal placeholder in place (not an error)
//! - Values are inserted verbatim; templates are trusted content, so no
//!   HTML escaping is performed

pub mod engine;

pub use engine::{load_and_render, render};
