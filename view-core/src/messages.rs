/// Localization keys used by the view controllers.
///
/// The catalog itself lives with the renderer; only the keys are fixed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    UserCalendarsTitle,
    UserCalendarsTitleFor,
    UserCalendarsCountOne,
    UserCalendarsCountOther,
    UserCalendarsEmpty,
    UserCalendarsMissingUser,
    UserCalendarsLoadFailed,
    VerifyEmailPending,
    VerifyEmailSuccess,
    VerifyEmailInvalidToken,
    VerifyEmailExpired,
    VerifyEmailError,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::UserCalendarsTitle => "admin.user_calendars.title",
            MessageKey::UserCalendarsTitleFor => "admin.user_calendars.title_for",
            MessageKey::UserCalendarsCountOne => "admin.user_calendars.count_one",
            MessageKey::UserCalendarsCountOther => "admin.user_calendars.count_other",
            MessageKey::UserCalendarsEmpty => "admin.user_calendars.empty",
            MessageKey::UserCalendarsMissingUser => "admin.user_calendars.missing_user",
            MessageKey::UserCalendarsLoadFailed => "admin.user_calendars.load_failed",
            MessageKey::VerifyEmailPending => "verify_email.pending",
            MessageKey::VerifyEmailSuccess => "verify_email.success",
            MessageKey::VerifyEmailInvalidToken => "verify_email.invalid_token",
            MessageKey::VerifyEmailExpired => "verify_email.expired",
            MessageKey::VerifyEmailError => "verify_email.error",
        }
    }
}
