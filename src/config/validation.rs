//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (not-found path is a registered route)
//! - Detect conflicting route keys
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::AppConfig;
use std::collections::HashSet;
use std::fmt;

/// One semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two routes share the same path key.
    DuplicateRoute(String),

    /// A route path does not start with '/'.
    BadRoutePath(String),

    /// A route has an empty template reference.
    EmptyTemplate(String),

    /// A route has an empty title.
    EmptyTitle(String),

    /// The configured not-found path has no route entry.
    MissingNotFoundRoute(String),

    /// The notice lifetime is zero, so the success notice would never show.
    ZeroNoticeLifetime,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateRoute(path) => {
                write!(f, "duplicate route path '{}'", path)
            }
            ValidationError::BadRoutePath(path) => {
                write!(f, "route path '{}' must start with '/'", path)
            }
            ValidationError::EmptyTemplate(path) => {
                write!(f, "route '{}' has an empty template reference", path)
            }
            ValidationError::EmptyTitle(path) => {
                write!(f, "route '{}' has an empty title", path)
            }
            ValidationError::MissingNotFoundRoute(path) => {
                write!(f, "not-found path '{}' has no route entry", path)
            }
            ValidationError::ZeroNoticeLifetime => {
                write!(f, "storage.notice_lifetime_ms must be greater than zero")
            }
        }
    }
}

/// Validate a config, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for route in &config.routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::BadRoutePath(route.path.clone()));
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.path.clone()));
        }
        if route.template.trim().is_empty() {
            errors.push(ValidationError::EmptyTemplate(route.path.clone()));
        }
        if route.title.trim().is_empty() {
            errors.push(ValidationError::EmptyTitle(route.path.clone()));
        }
    }

    if !seen.contains(config.shell.not_found_path.as_str()) {
        errors.push(ValidationError::MissingNotFoundRoute(
            config.shell.not_found_path.clone(),
        ));
    }

    if config.storage.notice_lifetime_ms == 0 {
        errors.push(ValidationError::ZeroNoticeLifetime);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
