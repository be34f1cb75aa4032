pub mod admin_login;
pub mod change_event;
pub mod event_page;
pub mod events_feed;
pub mod login;
pub mod main;
pub mod new_event;
pub mod news;
pub mod payment;
pub mod registration;
pub mod requesits;
pub mod resident_login;
pub mod resident_profile;
pub mod ukno;
pub mod user_profile;
