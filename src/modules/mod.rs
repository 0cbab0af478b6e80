pub mod health;
pub mod markets;
