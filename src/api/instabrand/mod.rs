pub mod client;

pub use client::InstabrandClient;
