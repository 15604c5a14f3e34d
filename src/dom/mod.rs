pub mod element;
pub mod file;
pub mod page;

pub use element::Element;
pub use file::{FileInput, SelectedFile};
pub use page::{NotificationPanel, Page, SubmitForm, WalletPanel};
