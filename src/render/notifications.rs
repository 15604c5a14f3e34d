use crate::models::NotificationRecord;

/// Shown in place of the list when the feed is empty.
pub const EMPTY_PLACEHOLDER: &str = concat!(
    r#"<div class="text-center p-3">"#,
    r#"<p class="text-muted small mb-0">No new notifications.</p>"#,
    r#"</div>"#
);

/// Build the full list fragment, one row per record in feed order. Each row
/// carries the notification id on both the row and its mark-as-read button.
pub fn notification_list(records: &[NotificationRecord]) -> String {
    let mut html = String::new();
    for record in records {
        html.push_str(&format!(
            r#"<div class="list-group-item notification-item" data-notif-id="{id}">"#,
            id = record.id
        ));
        html.push_str(&format!(
            r#"<div class="d-flex w-100 justify-content-between"><h6 class="mb-1">{title}</h6><small class="text-muted">{created_at}</small></div>"#,
            title = record.title,
            created_at = record.created_at
        ));
        html.push_str(&format!(
            r#"<p class="mb-1 small">{message}</p>"#,
            message = record.message
        ));
        html.push_str(&format!(
            r#"<div class="d-flex justify-content-between align-items-center mt-1"><small class="text-muted">Targeted to your SHG</small><button class="btn btn-outline-secondary btn-sm" data-notif-id="{id}">Mark as read</button></div>"#,
            id = record.id
        ));
        html.push_str("</div>");
    }
    html
}
