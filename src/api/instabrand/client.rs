use reqwest::Client as HttpClient;

use crate::api::error::FetchError;
use crate::models::BrandingSuggestion;

/// Client for the InstaBrand mock API. Suggestions are demo-grade copy
/// text; callers treat every failure as "no suggestion".
pub struct InstabrandClient {
    http_client: HttpClient,
    endpoint: String,
}

impl InstabrandClient {
    const DEFAULT_PATH: &'static str = "/instabrand/";

    /// Placeholder sent instead of a real upload URL; the file has not been
    /// submitted anywhere yet when the suggestion request goes out.
    const IMAGE_PLACEHOLDER: &'static str = "local-upload";

    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), Self::DEFAULT_PATH),
        }
    }

    /// Create a client against a custom endpoint (for testing)
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint,
        }
    }

    /// POST the form-encoded suggestion request for the given category.
    pub async fn suggest(&self, category: &str) -> Result<BrandingSuggestion, FetchError> {
        let params = [
            ("image_url", Self::IMAGE_PLACEHOLDER),
            ("category", category),
            ("shg_id", ""),
        ];

        let response = self
            .http_client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        response
            .json::<BrandingSuggestion>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
