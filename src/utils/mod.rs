pub mod preview;
pub mod title;

pub use preview::data_url;
pub use title::suggest_title;
