//! Business-rule checks applied to constructed customer records.
//!
//! Request bodies are checked against their schema in the API layer first
//! (see [`crate::api::dto::customer`]). The rules here run afterwards, on the
//! [`Customer`] that is about to be written, and never touch the store.

use crate::domain::entities::Customer;
use crate::error::AppError;

pub const COMPANY_NAME_FIELD: &str = "CompanyName";
pub const INVALID_COMPANY_NAME: &str = "Please enter a valid company name";

/// Rejects a customer whose company name is empty.
///
/// # Errors
///
/// Returns [`AppError::Validation`] keyed by `CompanyName`.
pub fn validate_customer(customer: &Customer) -> Result<(), AppError> {
    if customer.company_name.is_empty() {
        return Err(AppError::validation(
            COMPANY_NAME_FIELD,
            INVALID_COMPANY_NAME,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_named_customer() {
        let customer = Customer::register("Fabrikam Incorporated".to_string());
        assert!(validate_customer(&customer).is_ok());
    }

    #[test]
    fn test_accepts_short_name() {
        // Length is a schema concern, not a business rule.
        let customer = Customer::register("Acme".to_string());
        assert!(validate_customer(&customer).is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        let customer = Customer::register(String::new());

        let err = validate_customer(&customer).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(
            err.field_errors().unwrap()[COMPANY_NAME_FIELD],
            vec![INVALID_COMPANY_NAME.to_string()]
        );
    }
}
