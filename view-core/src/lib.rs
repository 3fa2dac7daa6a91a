//! Framework-free view controllers for the calendar admin and participant
//! verification screens.
//!
//! Each controller runs a one-shot load for a single activation and hands the
//! resulting state back to whatever renders it. Collaborators (router, API
//! clients, toasts, translations, session) are injected as trait objects.

pub mod activation;
pub mod cards;
pub mod error;
pub mod messages;
pub mod ports;
pub mod user_calendars;
pub mod verify_email;

pub use activation::Activation;
pub use cards::{CalendarCard, DEFAULT_LOCALE, MAX_VISIBLE_PARTICIPANTS};
pub use error::ApiError;
pub use messages::MessageKey;
pub use ports::{AdminApi, Destination, NotificationApi, Router, Session, Toasts, Translator};
pub use user_calendars::{CalendarsDisplay, CalendarsPhase, UserCalendarsLoader, UserCalendarsState};
pub use verify_email::{EmailVerifier, FailureReason, VerificationOutcome};
