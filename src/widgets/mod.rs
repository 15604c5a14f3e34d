//! The three dashboard widgets. Each attaches independently, owns a
//! disjoint set of element handles, and never coordinates with the others.

pub mod notifications;
pub mod poll;
pub mod submit_form;
pub mod wallet;

pub use notifications::NotificationWidget;
pub use poll::{spawn_poller, PollerHandle, POLL_INTERVAL};
pub use submit_form::SubmitFormWidget;
pub use wallet::WalletWidget;
