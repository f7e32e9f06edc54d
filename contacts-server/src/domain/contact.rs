use chrono::{DateTime, Utc};

use super::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct Contact {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct CreateContactRequest {
    pub(crate) name: String,
    pub(crate) email: String,
}

impl CreateContactRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: normalize_name(&self.name)?,
            email: normalize_email(&self.email)?,
        })
    }
}

fn normalize_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(DomainError::Validation {
            field: "name",
            message: "must be 1..100 chars",
        });
    }
    Ok(name.to_string())
}

fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(DomainError::Validation {
            field: "email",
            message: "must be a valid email address",
        });
    }
    Ok(email)
}
