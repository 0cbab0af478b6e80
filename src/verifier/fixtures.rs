// Randomized fixture data for the verification suites
//
// Uniqueness comes from uuid-derived suffixes so suites never collide on
// the cnpj natural key, even across repeated runs against a shared target.

use serde_json::{json, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::markets::models::{MarketPayload, CNPJ_LEN};

/// Fixture factory for market payloads
pub struct MarketFixture;

impl MarketFixture {
    /// Random 14-digit cnpj, unique for all practical purposes
    pub fn random_cnpj() -> String {
        let digits = Uuid::new_v4().as_u128() % 100_000_000_000_000;
        format!("{:0width$}", digits, width = CNPJ_LEN)
    }

    /// Random display name with a short unique suffix
    pub fn random_nome() -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("Mercado {}", &suffix[..8])
    }

    /// Valid payload with unique nome and cnpj
    pub fn valid() -> MarketPayload {
        MarketPayload {
            nome: Self::random_nome(),
            cnpj: Self::random_cnpj(),
            endereco: "Rua das Flores 123".to_string(),
            produtos: None,
        }
    }

    /// Valid payload carrying a nested product catalog
    pub fn with_catalog() -> MarketPayload {
        let mut produtos = BTreeMap::new();
        produtos.insert(
            "hortifruti".to_string(),
            vec![
                json!({"nome": "banana", "preco": 3.5}),
                json!({"nome": "tomate", "preco": 6.0}),
            ],
        );
        produtos.insert(
            "padaria".to_string(),
            vec![json!({"nome": "pao frances", "preco": 0.8})],
        );

        MarketPayload {
            produtos: Some(produtos),
            ..Self::valid()
        }
    }

    /// Invalid payload: empty name
    pub fn with_empty_nome() -> MarketPayload {
        MarketPayload {
            nome: String::new(),
            ..Self::valid()
        }
    }

    /// Invalid payload: cnpj with the wrong shape
    pub fn with_malformed_cnpj() -> MarketPayload {
        MarketPayload {
            cnpj: "12.345.678/0001".to_string(),
            ..Self::valid()
        }
    }

    /// Raw body missing required fields entirely
    pub fn missing_fields() -> Value {
        json!({ "nome": Self::random_nome() })
    }
}
