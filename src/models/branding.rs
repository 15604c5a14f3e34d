use serde::{Deserialize, Serialize};

/// Response from the InstaBrand suggestion endpoint. Only title and
/// description are ever written into the form; the endpoint also returns
/// hashtags and a poster URL that the form has no field for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingSuggestion {
    pub title: Option<String>,
    pub description: Option<String>,
    pub hashtags: Option<String>,
    pub poster_url: Option<String>,
}
