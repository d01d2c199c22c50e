pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod layout;

pub use confirm_dialog::ConfirmDialog;
pub use empty_state::EmptyState;
pub use error::{InlineErrorMessage, InlineNotice};
pub use layout::{LoadingSpinner, PageShell};
