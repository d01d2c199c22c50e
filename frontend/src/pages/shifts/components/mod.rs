mod assign;
mod card;
mod details;
mod form;

pub use assign::AssignShiftModal;
pub use card::ShiftCard;
pub use details::ShiftDetailsModal;
pub use form::ShiftFormModal;
