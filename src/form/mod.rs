//! Registration form subsystem.
//!
//! # Data Flow
//! ```text
//! Keystroke / blur / submit
//!     → mask.rs (progressive reformatting of raw digits)
//!     → rules.rs (declarative field rules: id → pattern + message)
//!     → validator.rs (field + form verdicts, inline errors, submission)
//!     → page::storage (JSON snapshot under the registration key)
//!     → page::notice (transient success notice)
//! ```
//!
//! # Design Decisions
//! - Rules are a data table, not a switch: adding a field never touches
//!   control flow
//! - Validation failures are field-local and non-fatal; they block
//!   submission and surface as inline messages
//! - Storage failures are logged, never propagated to the user path

pub mod mask;
pub mod rules;
pub mod validator;

pub use mask::{format_cep, format_cpf, format_telefone};
pub use rules::{canonical_field_id, default_rules, FieldRule};
pub use validator::{FormField, FormValidator, RegistrationForm};
