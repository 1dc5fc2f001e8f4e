//! Form validation and submission.
//!
//! # Responsibilities
//! - Re-validate fields on every keystroke and on blur
//! - Apply input masks as the user types
//! - Gate submission on a full-form pass
//! - Persist the submitted snapshot and show a transient success notice
//!
//! # Design Decisions
//! - `validate_field` always clears the previous inline error first, so a
//!   corrected field loses its message on the next pass
//! - `validate_form` evaluates every field (no short-circuit): the user sees
//!   all problems at once
//! - The required-field check wins over a pattern message, mirroring the
//!   source form's precedence

use crate::form::mask::{format_cep, format_cpf, format_telefone};
use crate::form::rules::{canonical_field_id, FieldRule};
use crate::page::notice::NoticeScheduler;
use crate::page::storage::KeyValueStore;
use crate::page::surface::FormSurface;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const REQUIRED_MESSAGE: &str = "Este campo é obrigatório";
const SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso!";

/// One input, select or textarea of the form.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Element id, also the rule key (possibly page-prefixed).
    pub id: String,

    /// Submission name for the serialized snapshot.
    pub name: String,

    /// Current value.
    pub value: String,

    /// Whether the generic non-empty rule applies.
    pub required: bool,
}

impl FormField {
    pub fn new(id: &str, name: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value: String::new(),
            required,
        }
    }
}

/// The registration form's current state.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
}

impl RegistrationForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// The EloSocial registration form: name, email, CPF, telefone
    /// (optional), CEP and a free-text message.
    pub fn registration() -> Self {
        Self::new(vec![
            FormField::new("nome", "nome", true),
            FormField::new("email", "email", true),
            FormField::new("cpf", "cpf", true),
            FormField::new("telefone", "telefone", false),
            FormField::new("cep", "cep", true),
            FormField::new("mensagem", "mensagem", false),
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.id == id) {
            field.value = value.to_string();
        }
    }

    /// Clear every field, as a form reset does after submission.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Flat name → value record, the shape persisted on submission.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

/// Applies the field's input mask, if it has one.
pub fn apply_mask(field_id: &str, raw: &str) -> String {
    match canonical_field_id(field_id) {
        "cpf" => format_cpf(raw),
        "telefone" => format_telefone(raw),
        "cep" => format_cep(raw),
        _ => raw.to_string(),
    }
}

/// Validates and submits a registration form.
pub struct FormValidator {
    rules: Vec<FieldRule>,
    surface: Arc<dyn FormSurface>,
    store: Arc<dyn KeyValueStore>,
    notice: NoticeScheduler,
    storage_key: String,
}

impl FormValidator {
    pub fn new(
        rules: Vec<FieldRule>,
        surface: Arc<dyn FormSurface>,
        store: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
        notice_lifetime: Duration,
    ) -> Self {
        Self {
            rules,
            notice: NoticeScheduler::new(Arc::clone(&surface), notice_lifetime),
            surface,
            store,
            storage_key: storage_key.into(),
        }
    }

    /// Keystroke handler: apply the field's mask, write the masked value
    /// back, re-validate. Returns the field verdict.
    pub fn input(&self, form: &mut RegistrationForm, field_id: &str, raw: &str) -> bool {
        let masked = apply_mask(field_id, raw);
        form.set_value(field_id, &masked);
        match form.field(field_id) {
            Some(field) => self.validate_field(field),
            None => true,
        }
    }

    /// Blur handler: re-validate without touching the value.
    pub fn blur(&self, form: &RegistrationForm, field_id: &str) -> bool {
        match form.field(field_id) {
            Some(field) => self.validate_field(field),
            None => true,
        }
    }

    /// Validate one field. Clears any prior inline error, applies the
    /// field's rule and the generic required rule, and surfaces the failure
    /// message inline. Returns the verdict.
    pub fn validate_field(&self, field: &FormField) -> bool {
        let value = field.value.trim();
        self.surface.clear_field_error(&field.id);

        let mut verdict = true;
        let mut message = "";

        let rule_id = canonical_field_id(&field.id);
        if let Some(rule) = self.rules.iter().find(|r| r.field_id == rule_id) {
            let skip = rule.skip_when_empty && value.is_empty();
            if !skip && !rule.pattern.is_match(value) {
                verdict = false;
                message = &rule.message;
            }
        }

        if field.required && value.is_empty() {
            verdict = false;
            message = REQUIRED_MESSAGE;
        }

        if !verdict {
            self.surface.show_field_error(&field.id, message);
        }
        verdict
    }

    /// Validate every field; true only when all pass.
    pub fn validate_form(&self, form: &RegistrationForm) -> bool {
        form.fields()
            .iter()
            .fold(true, |ok, field| self.validate_field(field) && ok)
    }

    /// Submit handler. Prevents the default submission, runs the full-form
    /// pass, and only persists when every field passes. Returns whether the
    /// submission went through.
    pub fn submit(&self, form: &mut RegistrationForm) -> bool {
        if !self.validate_form(form) {
            tracing::debug!("Submission blocked by validation");
            return false;
        }
        self.handle_submit(form);
        true
    }

    fn handle_submit(&self, form: &mut RegistrationForm) {
        let snapshot = form.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(record) => {
                if let Err(error) = self.store.set(&self.storage_key, &record) {
                    tracing::error!(
                        key = %self.storage_key,
                        error = %error,
                        "Failed to persist registration"
                    );
                } else {
                    tracing::info!(key = %self.storage_key, "Registration stored");
                }
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to serialize registration");
            }
        }

        self.notice.show(SUCCESS_MESSAGE);
        form.reset();
    }
}
