//! Dashboard client for the GramBazaar SHG marketplace.
//!
//! Three independent widgets mirror the marketplace's dashboard pages: a
//! notification poller, a wallet poller, and a product-submission assistant.
//! Widgets receive explicit element handles at attach time and render HTML
//! fragments through them; the pollers repeat on a fixed 15-second cadence
//! and absorb every fetch failure, keeping the last successful render.

pub mod api;
pub mod dom;
pub mod models;
pub mod render;
pub mod utils;
pub mod widgets;
