use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::response::ErrorResponse;

impl From<ValidationErrors> for ErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

/// One `invalid_request` entry per failing field, sorted by field path.
///
/// Nested structs are addressed as `address.city`, list items as
/// `items[0].name`.
impl From<&ValidationErrors> for ErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_fields(errors, "", &mut fields);
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        // a failed validation must never render as an empty 200 body
        if fields.is_empty() {
            fields.push(("request".to_string(), "is invalid".to_string()));
        }

        fields
            .into_iter()
            .fold(ErrorResponse::invalid_request(), |builder, (field, message)| {
                builder.with_error(field, message)
            })
            .build()
    }
}

fn collect_fields(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(error) = field_errors.first() {
                    out.push((path, describe(error)));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_fields(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_fields(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let message = match &*error.code {
        "required" => "must be present",
        "email" => "must be a valid email address",
        "url" => "must be a valid URL",
        "length" => "has an invalid length",
        "range" => "is out of range",
        "must_match" => "does not match",
        "contains" | "does_not_contain" | "regex" => "has an invalid format",
        _ => "is invalid",
    };
    message.to_string()
}
