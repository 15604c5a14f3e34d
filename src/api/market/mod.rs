pub mod client;

pub use client::MarketClient;
