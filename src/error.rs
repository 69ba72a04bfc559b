//! Application error type and its HTTP mapping.
//!
//! Every failure is resolved at the HTTP boundary:
//!
//! - [`AppError::Validation`] - 400 with a validation-problem document
//! - [`AppError::NotFound`] - 404 with an empty body

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Field name to human-readable messages, keyed by wire (PascalCase) name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// Body of a 400 response.
#[derive(Debug, Serialize)]
struct ValidationProblem {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'static str,
    status: u16,
    errors: FieldErrors,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("{message}")]
    NotFound { message: String },
}

impl AppError {
    /// A validation failure for a single field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.clone()]);

        Self::Validation { message, errors }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Field-level messages carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation { errors, .. } => Some(errors),
            AppError::NotFound { .. } => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, errors } => {
                tracing::debug!(%message, ?errors, "Request rejected by validation");

                let body = ValidationProblem {
                    kind: VALIDATION_PROBLEM_TYPE,
                    title: VALIDATION_PROBLEM_TITLE,
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    errors,
                };

                (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/problem+json")],
                    Json(body),
                )
                    .into_response()
            }
            AppError::NotFound { message } => {
                tracing::debug!(%message, "Resource not found");
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();

        for (field, field_errors) in e.field_errors() {
            let name = to_pascal_case(&field);
            let messages = field_errors
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("The field {name} is invalid ({}).", err.code),
                })
                .collect();
            errors.insert(name, messages);
        }

        Self::Validation {
            message: "Request validation failed".to_string(),
            errors,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        Self::validation("body", e.body_text())
    }
}

/// Converts a Rust field name to its wire name (`company_name` -> `CompanyName`).
///
/// Names without underscores only get their first letter upper-cased.
fn to_pascal_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("company_name"), "CompanyName");
        assert_eq!(to_pascal_case("CompanyName"), "CompanyName");
        assert_eq!(to_pascal_case("projects"), "Projects");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_validation_helper_single_field() {
        let err = AppError::validation("CompanyName", "Please enter a valid company name");

        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors["CompanyName"],
            vec!["Please enter a valid company name".to_string()]
        );
    }

    #[test]
    fn test_from_validation_errors_uses_wire_names() {
        let mut source = ValidationErrors::new();
        source.add(
            "company_name",
            ValidationError::new("length").with_message("too short".into()),
        );

        let err = AppError::from(source);

        let errors = err.field_errors().unwrap();
        assert_eq!(errors["CompanyName"], vec!["too short".to_string()]);
    }

    #[test]
    fn test_status_codes() {
        let response = AppError::validation("CompanyName", "bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );

        let response = AppError::not_found("Customer not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_has_no_field_errors() {
        assert!(AppError::not_found("missing").field_errors().is_none());
    }
}
