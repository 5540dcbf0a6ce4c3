//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has already passed its `Validate` rules.
///
/// Malformed JSON and rule violations both become `AppError::Validation`
/// (400), so handlers only ever see well-formed payloads.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Join every field message, ordered by field name so output is stable.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} inválido", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_messages_sorted_by_field() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("numero", ValidationError::new("length").with_message("numero longo".into()));
        errors.add("cep", ValidationError::new("regex").with_message("CEP inválido".into()));

        assert_eq!(format_validation_errors(&errors), "CEP inválido, numero longo");
    }

    #[test]
    fn test_missing_message_falls_back_to_field_name() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("bairro", ValidationError::new("length"));

        assert_eq!(format_validation_errors(&errors), "bairro inválido");
    }
}
