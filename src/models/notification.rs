use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

/// One notification as the poll endpoint reports it. All display text,
/// including the timestamp, arrives already formatted by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: Scalar,
    pub title: String,
    pub message: String,
    pub created_at: String,
}

/// Response from the notification poll endpoint. A missing list means no
/// notifications, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationFeed {
    #[serde(default)]
    pub notifications: Vec<NotificationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_list_is_empty() {
        let feed: NotificationFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.notifications.is_empty());
    }

    #[test]
    fn test_parses_records_in_order() {
        let body = r#"{"notifications": [
            {"id": 7, "title": "Forecast ready", "message": "New demand forecast available.", "created_at": "2025-11-02 09:15"},
            {"id": 9, "title": "Price alert", "message": "Bamboo prices rising.", "created_at": "2025-11-02 10:40"}
        ]}"#;
        let feed: NotificationFeed = serde_json::from_str(body).unwrap();
        assert_eq!(feed.notifications.len(), 2);
        assert_eq!(feed.notifications[0].title, "Forecast ready");
        assert_eq!(feed.notifications[1].id.to_string(), "9");
    }
}
