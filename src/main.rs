use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use grambazaar_dash::api::{InstabrandClient, MarketClient};
use grambazaar_dash::dom::{Element, FileInput, NotificationPanel, Page, SubmitForm, WalletPanel};
use grambazaar_dash::widgets::{NotificationWidget, SubmitFormWidget, WalletWidget, POLL_INTERVAL};

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Assemble the element handles the SHG dashboard page supplies.
fn dashboard_page(notifications_path: String, wallet_path: String) -> Page {
    let preview = Element::new();
    preview.hide();
    let count = Element::new();
    count.hide();

    Page {
        notifications: Some(NotificationPanel {
            poll_url: notifications_path,
            list: Element::new(),
            count,
        }),
        wallet: Some(WalletPanel {
            poll_url: wallet_path,
            page_balance: Some(Element::new()),
            dashboard_balance: Some(Element::new()),
            ledger_body: Some(Element::new()),
        }),
        submit_form: Some(SubmitForm {
            image_input: FileInput::new(),
            preview,
            title: Some(Element::new()),
            description: Some(Element::new()),
            category: Some(Element::new()),
        }),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("grambazaar_dash=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting GramBazaar dashboard client...");

    let base_url = env_or("MARKET_BASE_URL", "http://127.0.0.1:8000");
    let notifications_path = env_or("NOTIFICATIONS_POLL_PATH", "/api/notifications/");
    let wallet_path = env_or("WALLET_POLL_PATH", "/api/shg/wallet/");

    let market = Arc::new(match std::env::var("SESSION_COOKIE") {
        Ok(cookie) => MarketClient::with_session(base_url.clone(), cookie),
        Err(_) => MarketClient::new(base_url.clone()),
    });
    let instabrand = Arc::new(InstabrandClient::new(&base_url));

    let page = dashboard_page(notifications_path, wallet_path);

    let mut handles = Vec::new();
    if let Some(widget) = NotificationWidget::attach(&page, market.clone()) {
        info!("notification poller attached");
        handles.push(widget.spawn());
    }
    if let Some(widget) = WalletWidget::attach(&page, market.clone()) {
        info!("wallet poller attached");
        handles.push(widget.spawn());
    }
    // The form assistant only acts on image selection events; holding the
    // widget keeps it ready for them.
    let _assistant = SubmitFormWidget::attach(&page, instabrand);

    info!(
        "polling {} every {}s, press Ctrl-C to stop",
        base_url,
        POLL_INTERVAL.as_secs()
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to wait for shutdown signal: {}", e);
    }

    info!("shutting down, cancelling {} poller(s)", handles.len());
    for handle in &handles {
        handle.abort();
    }
}
