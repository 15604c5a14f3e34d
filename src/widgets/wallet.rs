use std::sync::Arc;
use tracing::debug;

use super::poll::{spawn_poller, PollerHandle, POLL_INTERVAL};
use crate::api::{FetchError, MarketClient};
use crate::dom::{Element, Page};
use crate::models::WalletSnapshot;
use crate::render::wallet as render;

/// The wallet panel: polls the snapshot with the session attached and keeps
/// the balance displays and ledger table in step with it.
#[derive(Clone)]
pub struct WalletWidget {
    client: Arc<MarketClient>,
    poll_url: String,
    page_balance: Option<Element>,
    dashboard_balance: Option<Element>,
    ledger_body: Option<Element>,
}

impl WalletWidget {
    /// Attach to the page, if it renders the wallet panel.
    pub fn attach(page: &Page, client: Arc<MarketClient>) -> Option<Self> {
        let panel = page.wallet.as_ref()?;
        Some(Self {
            client,
            poll_url: panel.poll_url.clone(),
            page_balance: panel.page_balance.clone(),
            dashboard_balance: panel.dashboard_balance.clone(),
            ledger_body: panel.ledger_body.clone(),
        })
    }

    /// One fetch-and-render cycle.
    pub async fn run_cycle(&self) {
        let result = self.client.poll_wallet(&self.poll_url).await;
        self.apply(result);
    }

    /// Render a cycle's outcome. A failed cycle leaves the previous render
    /// untouched; the next tick is the only retry.
    pub fn apply(&self, result: Result<WalletSnapshot, FetchError>) {
        match result {
            Ok(snapshot) => self.render(&snapshot),
            Err(e) => debug!("wallet poll failed: {}", e),
        }
    }

    fn render(&self, snapshot: &WalletSnapshot) {
        if let Some(balance) = &snapshot.balance {
            let formatted = render::format_amount(balance);
            for el in [&self.page_balance, &self.dashboard_balance]
                .into_iter()
                .flatten()
            {
                el.set_text(formatted.clone());
            }
        }

        let Some(body) = &self.ledger_body else {
            return;
        };
        if snapshot.entries.is_empty() {
            body.set_html(render::EMPTY_LEDGER_ROW.to_string());
        } else {
            body.set_html(render::ledger_rows(&snapshot.entries));
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
