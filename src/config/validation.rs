//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check URL shapes and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig -> Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use url::Url;

use crate::config::schema::{ClientConfig, FamilyConfig};

/// A single validation failure, pointing at the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_base_url("endpoints.base_url", &config.endpoints.base_url, &mut errors);
    check_family("endpoints.primary", &config.endpoints.primary, &mut errors);
    check_family("endpoints.secondary", &config.endpoints.secondary, &mut errors);

    if config.ui.status_clear_secs == 0 {
        errors.push(ValidationError {
            field: "ui.status_clear_secs".to_string(),
            message: "must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_base_url(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: field.to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: field.to_string(),
            message: format!("not a valid URL: {}", e),
        }),
    }
}

fn check_family(section: &str, family: &FamilyConfig, errors: &mut Vec<ValidationError>) {
    if let Some(base) = &family.base_url {
        check_base_url(&format!("{}.base_url", section), base, errors);
    }

    for (name, path) in [
        ("list", &family.list),
        ("add", &family.add),
        ("delete", &family.delete),
    ] {
        if !path.starts_with('/') {
            errors.push(ValidationError {
                field: format!("{}.{}", section, name),
                message: "route path must start with '/'".to_string(),
            });
        }
    }
}
