pub mod market_repository;

pub use market_repository::{InMemoryMarketRepository, MarketRepository};
