pub mod error;
pub mod instabrand;
pub mod market;

#[cfg(test)]
pub mod testutil;

pub use error::FetchError;
pub use instabrand::InstabrandClient;
pub use market::MarketClient;
