//! Field validation rules.
//!
//! # Responsibilities
//! - Declare, per field id, the pattern a value must match and the message
//!   shown when it does not
//!
//! # Design Decisions
//! - A data table instead of a switch statement: tests iterate it, and new
//!   fields are new rows
//! - `skip_when_empty` marks optional fields whose format is only checked
//!   once something was typed (telefone)

use regex::Regex;

/// One validation rule, keyed by field id.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Canonical field id this rule applies to.
    pub field_id: String,

    /// Pattern the trimmed value must match.
    pub pattern: Regex,

    /// Inline message shown when the pattern does not match.
    pub message: String,

    /// Skip the pattern check when the value is empty (optional fields).
    pub skip_when_empty: bool,
}

fn rule(field_id: &str, pattern: &str, message: &str, skip_when_empty: bool) -> FieldRule {
    FieldRule {
        field_id: field_id.to_string(),
        pattern: Regex::new(pattern).unwrap(),
        message: message.to_string(),
        skip_when_empty,
    }
}

/// Rules for the registration form fields.
pub fn default_rules() -> Vec<FieldRule> {
    vec![
        rule(
            "nome",
            r"^.{3,}$",
            "Nome deve ter pelo menos 3 caracteres",
            false,
        ),
        rule(
            "email",
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            "Email inválido",
            false,
        ),
        rule(
            "cpf",
            r"^\d{3}\.\d{3}\.\d{3}-\d{2}$",
            "CPF deve estar no formato 000.000.000-00",
            false,
        ),
        rule(
            "telefone",
            r"^\(\d{2}\)\s\d{4,5}-\d{4}$",
            "Telefone deve estar no formato (00) 00000-0000 ou (00) 0000-0000",
            true,
        ),
        rule(
            "cep",
            r"^\d{5}-\d{3}$",
            "CEP deve estar no formato 00000-000",
            false,
        ),
    ]
}

/// Map page-specific element ids (`cadastro-cpf`) onto the canonical rule
/// and mask ids (`cpf`).
pub fn canonical_field_id(field_id: &str) -> &str {
    field_id.strip_prefix("cadastro-").unwrap_or(field_id)
}
