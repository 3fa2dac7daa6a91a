//! Loader for the admin "calendars of a user" screen.

use std::rc::Rc;

use shared::models::CalendarSummary;

use crate::activation::Activation;
use crate::cards::CalendarCard;
use crate::messages::MessageKey;
use crate::ports::{AdminApi, Destination, Router, Session, Toasts, Translator};

pub const USER_ID_PARAM: &str = "user_id";
pub const DISPLAY_NAME_QUERY: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarsPhase {
    Loading,
    Loaded,
    Failed,
    /// No user id was given; the viewer was sent back to the admin root.
    Redirected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCalendarsState {
    pub phase: CalendarsPhase,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub calendars: Vec<CalendarSummary>,
}

/// What the screen body shows. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarsDisplay<'a> {
    Loading,
    Empty,
    Grid(&'a [CalendarSummary]),
}

impl UserCalendarsState {
    pub fn loading(user_id: Option<String>, display_name: Option<String>) -> Self {
        Self {
            phase: CalendarsPhase::Loading,
            user_id,
            display_name,
            calendars: Vec::new(),
        }
    }

    fn settled(&self, phase: CalendarsPhase, calendars: Vec<CalendarSummary>) -> Self {
        Self {
            phase,
            user_id: self.user_id.clone(),
            display_name: self.display_name.clone(),
            calendars,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == CalendarsPhase::Loading
    }

    /// Whether the header count applies; not while loading or redirecting away.
    pub fn shows_count(&self) -> bool {
        matches!(self.phase, CalendarsPhase::Loaded | CalendarsPhase::Failed)
    }

    pub fn display(&self) -> CalendarsDisplay<'_> {
        if self.is_loading() {
            CalendarsDisplay::Loading
        } else if self.calendars.is_empty() {
            CalendarsDisplay::Empty
        } else {
            CalendarsDisplay::Grid(&self.calendars)
        }
    }

    /// Card view models, dates formatted in the viewer's preferred locale.
    pub fn cards(&self, session: &dyn Session) -> Vec<CalendarCard> {
        let locale = session.locale();
        self.calendars
            .iter()
            .map(|calendar| CalendarCard::new(calendar, locale.as_deref()))
            .collect()
    }

    pub fn title(&self, translator: &dyn Translator) -> String {
        match self.display_name.as_ref().or(self.user_id.as_ref()) {
            Some(name) => {
                translator.translate(MessageKey::UserCalendarsTitleFor, &[("name", name.clone())])
            }
            None => translator.translate(MessageKey::UserCalendarsTitle, &[]),
        }
    }

    pub fn count_label(&self, translator: &dyn Translator) -> String {
        let count = self.calendars.len();
        let key = if count == 1 {
            MessageKey::UserCalendarsCountOne
        } else {
            MessageKey::UserCalendarsCountOther
        };
        translator.translate(key, &[("count", count.to_string())])
    }
}

/// One-shot loader for a single activation of the screen.
///
/// `run` consumes the loader, so the fetch can happen at most once; a new
/// activation builds a new loader.
pub struct UserCalendarsLoader {
    api: Rc<dyn AdminApi>,
    router: Rc<dyn Router>,
    toasts: Rc<dyn Toasts>,
    translator: Rc<dyn Translator>,
}

impl UserCalendarsLoader {
    pub fn new(
        api: Rc<dyn AdminApi>,
        router: Rc<dyn Router>,
        toasts: Rc<dyn Toasts>,
        translator: Rc<dyn Translator>,
    ) -> Self {
        Self {
            api,
            router,
            toasts,
            translator,
        }
    }

    /// State to render before `run` settles.
    pub fn initial_state(&self) -> UserCalendarsState {
        UserCalendarsState::loading(
            self.router.required_param(USER_ID_PARAM),
            self.router.optional_query(DISPLAY_NAME_QUERY),
        )
    }

    /// Fetches the calendars and returns the terminal state.
    ///
    /// Returns `None` when the activation was disposed while the request was
    /// in flight; the result is then dropped without any toast.
    pub async fn run(self, activation: &Activation) -> Option<UserCalendarsState> {
        let state = self.initial_state();

        let Some(user_id) = state.user_id.clone() else {
            tracing::warn!("User calendars opened without a user id, redirecting to admin home");
            self.toasts
                .error(self.translator.translate(MessageKey::UserCalendarsMissingUser, &[]));
            self.router.navigate(Destination::AdminHome);
            return Some(state.settled(CalendarsPhase::Redirected, Vec::new()));
        };

        tracing::info!(user_id = %user_id, "Loading calendars for user");
        let result = self.api.user_calendars(&user_id).await;

        if !activation.is_live() {
            tracing::debug!(user_id = %user_id, "Calendars arrived after the view was closed, dropping");
            return None;
        }

        match result {
            Ok(calendars) => {
                tracing::info!(user_id = %user_id, count = calendars.len(), "Loaded user calendars");
                Some(state.settled(CalendarsPhase::Loaded, calendars))
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, "Failed to fetch user calendars: {}", e);
                let message = e
                    .message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| self.translator.translate(MessageKey::UserCalendarsLoadFailed, &[]));
                self.toasts.error(message);
                Some(state.settled(CalendarsPhase::Failed, Vec::new()))
            }
        }
    }
}
