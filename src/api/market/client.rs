use reqwest::header::{HeaderValue, COOKIE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::api::error::FetchError;
use crate::models::{NotificationFeed, Scalar, WalletSnapshot};

/// Client for the marketplace's own JSON endpoints: notification polling,
/// wallet polling, and read receipts.
pub struct MarketClient {
    http_client: HttpClient,
    base_url: String,
    session_cookie: Option<String>,
}

impl MarketClient {
    const MARK_READ_PATH: &'static str = "/api/mark-notification-read";

    /// Create a client without a session. Notification polling works either
    /// way; the server answers wallet requests with an empty snapshot when
    /// no session is attached.
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            session_cookie: None,
        }
    }

    /// Create a client carrying a session cookie. The cookie is attached
    /// only to requests that need the same-origin credential scope.
    pub fn with_session(base_url: String, session_cookie: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            session_cookie: Some(session_cookie),
        }
    }

    /// Resolve a path from page markup against the configured origin.
    fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    fn cookie_header(&self) -> Option<HeaderValue> {
        self.session_cookie
            .as_ref()
            .and_then(|c| HeaderValue::from_str(c).ok())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        with_credentials: bool,
    ) -> Result<T, FetchError> {
        let mut request = self.http_client.get(self.absolute(path));
        if with_credentials {
            if let Some(cookie) = self.cookie_header() {
                request = request.header(COOKIE, cookie);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// GET the notification feed from the poll URL the page supplied.
    pub async fn poll_notifications(&self, path: &str) -> Result<NotificationFeed, FetchError> {
        self.get_json(path, false).await
    }

    /// GET the wallet snapshot. Sent with the session cookie attached so the
    /// server can resolve the SHG the wallet belongs to.
    pub async fn poll_wallet(&self, path: &str) -> Result<WalletSnapshot, FetchError> {
        self.get_json(path, true).await
    }

    /// POST a read receipt for one notification.
    pub async fn mark_notification_read(&self, id: &Scalar) -> Result<(), FetchError> {
        let url = self.absolute(&format!("{}/{}/", Self::MARK_READ_PATH, id));
        let mut request = self.http_client.post(url);
        if let Some(cookie) = self.cookie_header() {
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }
        Ok(())
    }
}
