use super::element::Element;
use super::file::FileInput;

/// The notification panel on the SHG dashboard: the container carries the
/// poll URL as a data attribute, the list and count elements are always
/// rendered alongside it.
#[derive(Clone)]
pub struct NotificationPanel {
    pub poll_url: String,
    pub list: Element,
    pub count: Element,
}

/// The wallet area. Either the wallet page or the dashboard summary may be
/// rendered without the other, so each display element is optional.
#[derive(Clone)]
pub struct WalletPanel {
    pub poll_url: String,
    pub page_balance: Option<Element>,
    pub dashboard_balance: Option<Element>,
    pub ledger_body: Option<Element>,
}

/// The product submission form. Image input and preview always come as a
/// pair; the text fields depend on which form variant was rendered.
#[derive(Clone)]
pub struct SubmitForm {
    pub image_input: FileInput,
    pub preview: Element,
    pub title: Option<Element>,
    pub description: Option<Element>,
    pub category: Option<Element>,
}

/// What the current page supplies. Each widget attaches only when its panel
/// is present and ignores the rest.
#[derive(Clone, Default)]
pub struct Page {
    pub notifications: Option<NotificationPanel>,
    pub wallet: Option<WalletPanel>,
    pub submit_form: Option<SubmitForm>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }
}
