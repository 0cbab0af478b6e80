// Market model with validation
//
// A market is the primary resource of the /mercado collection: a registered
// establishment identified by its cnpj (the tax-registration number, unique
// across all records) with an optional nested product catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::{AppError, Result};

/// Number of digits in a valid cnpj
pub const CNPJ_LEN: usize = 14;

/// A registered market
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Market {
    /// Server-assigned identifier, positive and immutable
    pub id: i64,

    /// Display name
    pub nome: String,

    /// Tax-registration number, 14 digits, unique across all markets
    pub cnpj: String,

    /// Street address
    pub endereco: String,

    /// Optional product catalog: category name to list of items.
    /// Item structure is opaque to the contract and echoed verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produtos: Option<BTreeMap<String, Vec<Value>>>,
}

/// Input shape for create and update requests: a market minus its id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPayload {
    pub nome: String,
    pub cnpj: String,
    pub endereco: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produtos: Option<BTreeMap<String, Vec<Value>>>,
}

impl MarketPayload {
    /// Validate the payload against the contract's field rules.
    ///
    /// Uniqueness of cnpj is a store-level concern, checked by the service.
    pub fn validate(&self) -> Result<()> {
        if self.nome.trim().is_empty() {
            return Err(AppError::validation("Field 'nome' must not be empty"));
        }
        if self.endereco.trim().is_empty() {
            return Err(AppError::validation("Field 'endereco' must not be empty"));
        }
        if self.cnpj.len() != CNPJ_LEN || !self.cnpj.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::validation(format!(
                "Field 'cnpj' must be exactly {} digits",
                CNPJ_LEN
            )));
        }
        Ok(())
    }

    /// Materialize a market record from this payload with a server-assigned id
    pub fn into_market(self, id: i64) -> Market {
        Market {
            id,
            nome: self.nome,
            cnpj: self.cnpj,
            endereco: self.endereco,
            produtos: self.produtos,
        }
    }
}
