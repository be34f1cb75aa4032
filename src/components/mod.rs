pub mod event_card;
pub mod login_layout;
pub mod main_layout;
