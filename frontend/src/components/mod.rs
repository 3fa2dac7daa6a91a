pub mod calendar_card;
pub mod header;
pub mod toast;
