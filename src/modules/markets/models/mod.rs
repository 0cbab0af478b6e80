pub mod market;

pub use market::{Market, MarketPayload, CNPJ_LEN};
