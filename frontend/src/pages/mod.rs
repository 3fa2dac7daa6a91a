pub mod admin;
pub mod admin_user_calendars;
pub mod home;
pub mod not_found;
pub mod verify_email;
