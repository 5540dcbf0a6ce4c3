//! Endereço (address) domain entity and its create/update payloads.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{CEP_PATTERN, UF_PATTERN};

static CEP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(CEP_PATTERN).expect("valid CEP pattern"));
static UF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(UF_PATTERN).expect("valid UF pattern"));

/// Address entity as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Endereco {
    /// Unique address identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub uuid: Uuid,
    #[schema(example = "Rua das Flores")]
    pub logradouro: String,
    #[schema(example = "123")]
    pub numero: String,
    #[schema(example = "Apto 42")]
    pub complemento: Option<String>,
    #[schema(example = "Centro")]
    pub bairro: String,
    #[schema(example = "São Paulo")]
    pub cidade: String,
    #[schema(example = "SP")]
    pub estado: String,
    #[schema(example = "01001-000")]
    pub cep: String,
    /// Owning client
    pub cliente_uuid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Address creation payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateEndereco {
    #[validate(length(min = 1, max = 255, message = "O logradouro é obrigatório"))]
    #[schema(example = "Rua das Flores")]
    pub logradouro: String,
    #[validate(length(min = 1, max = 20, message = "O número é obrigatório"))]
    #[schema(example = "123")]
    pub numero: String,
    #[validate(length(max = 255, message = "O complemento é muito longo"))]
    #[schema(example = "Apto 42")]
    pub complemento: Option<String>,
    #[validate(length(min = 1, max = 255, message = "O bairro é obrigatório"))]
    #[schema(example = "Centro")]
    pub bairro: String,
    #[validate(length(min = 1, max = 255, message = "A cidade é obrigatória"))]
    #[schema(example = "São Paulo")]
    pub cidade: String,
    #[validate(regex(path = *UF_REGEX, message = "O estado deve ser a sigla da UF com duas letras maiúsculas"))]
    #[schema(example = "SP", min_length = 2, max_length = 2)]
    pub estado: String,
    #[validate(regex(path = *CEP_REGEX, message = "O CEP deve estar no formato 00000-000"))]
    #[schema(example = "01001-000")]
    pub cep: String,
    /// Client that owns the address
    pub cliente_uuid: Uuid,
}

/// Partial address update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateEndereco {
    #[validate(length(min = 1, max = 255, message = "O logradouro não pode ser vazio"))]
    pub logradouro: Option<String>,
    #[validate(length(min = 1, max = 20, message = "O número não pode ser vazio"))]
    pub numero: Option<String>,
    /// `null` clears the complement; an absent field leaves it unchanged
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 255, message = "O complemento é muito longo"))]
    #[schema(value_type = Option<String>, nullable)]
    pub complemento: Option<Option<String>>,
    #[validate(length(min = 1, max = 255, message = "O bairro não pode ser vazio"))]
    pub bairro: Option<String>,
    #[validate(length(min = 1, max = 255, message = "A cidade não pode ser vazia"))]
    pub cidade: Option<String>,
    #[validate(regex(path = *UF_REGEX, message = "O estado deve ser a sigla da UF com duas letras maiúsculas"))]
    pub estado: Option<String>,
    #[validate(regex(path = *CEP_REGEX, message = "O CEP deve estar no formato 00000-000"))]
    pub cep: Option<String>,
    pub cliente_uuid: Option<Uuid>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateEndereco {
    /// True when the payload carries no field to change.
    pub fn is_empty(&self) -> bool {
        self.logradouro.is_none()
            && self.numero.is_none()
            && self.complemento.is_none()
            && self.bairro.is_none()
            && self.cidade.is_none()
            && self.estado.is_none()
            && self.cep.is_none()
            && self.cliente_uuid.is_none()
    }
}
