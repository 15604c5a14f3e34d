use std::sync::Arc;
use tracing::debug;

use super::poll::{spawn_poller, PollerHandle, POLL_INTERVAL};
use crate::api::{FetchError, MarketClient};
use crate::dom::{Element, Page};
use crate::models::{NotificationFeed, Scalar};
use crate::render::notifications as render;

/// The dashboard notification panel: polls the feed and fully replaces the
/// list and count badge on every successful cycle.
#[derive(Clone)]
pub struct NotificationWidget {
    client: Arc<MarketClient>,
    poll_url: String,
    list: Element,
    count: Element,
}

impl NotificationWidget {
    /// Attach to the page, if it renders the notification panel.
    pub fn attach(page: &Page, client: Arc<MarketClient>) -> Option<Self> {
        let panel = page.notifications.as_ref()?;
        Some(Self {
            client,
            poll_url: panel.poll_url.clone(),
            list: panel.list.clone(),
            count: panel.count.clone(),
        })
    }

    /// One fetch-and-render cycle.
    pub async fn run_cycle(&self) {
        let result = self.client.poll_notifications(&self.poll_url).await;
        self.apply(result);
    }

    /// Render a cycle's outcome. A failed cycle leaves the previous render
    /// untouched; the next tick is the only retry.
    pub fn apply(&self, result: Result<NotificationFeed, FetchError>) {
        match result {
            Ok(feed) => self.render(&feed),
            Err(e) => debug!("notification poll failed: {}", e),
        }
    }

    fn render(&self, feed: &NotificationFeed) {
        if feed.notifications.is_empty() {
            self.list.set_html(render::EMPTY_PLACEHOLDER.to_string());
            self.count.hide();
            return;
        }

        self.list
            .set_html(render::notification_list(&feed.notifications));
        self.count.set_text(feed.notifications.len().to_string());
        self.count.show();
    }

    /// Post a read receipt for one notification and refresh the panel when
    /// the server accepts it. Failures are absorbed like poll failures.
    pub async fn mark_read(&self, id: &Scalar) {
        match self.client.mark_notification_read(id).await {
            Ok(()) => self.run_cycle().await,
            Err(e) => debug!("mark-notification-read failed: {}", e),
        }
    }

    /// Start the repeating poll loop.
    pub fn spawn(self) -> PollerHandle {
        spawn_poller(POLL_INTERVAL, move || {
            let widget = self.clone();
            async move { widget.run_cycle().await }
        })
    }
}
