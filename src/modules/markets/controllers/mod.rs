pub mod market_controller;

pub use market_controller::configure;
