#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shared::api::VerifyParticipantEmailRequest;
use shared::models::{CalendarSummary, Participant};
use uuid::Uuid;
use view_core::{
    Activation, AdminApi, ApiError, Destination, MessageKey, NotificationApi, Router, Session,
    Toasts, Translator,
};

/// Admin API returning a canned result and recording every call.
pub struct FakeAdminApi {
    result: Result<Vec<CalendarSummary>, ApiError>,
    pub calls: RefCell<Vec<String>>,
    /// Disposed while the request is "in flight".
    pub dispose_during_call: RefCell<Option<Activation>>,
}

impl FakeAdminApi {
    pub fn returning(result: Result<Vec<CalendarSummary>, ApiError>) -> Rc<Self> {
        Rc::new(Self {
            result,
            calls: RefCell::new(Vec::new()),
            dispose_during_call: RefCell::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl AdminApi for FakeAdminApi {
    async fn user_calendars(&self, user_id: &str) -> Result<Vec<CalendarSummary>, ApiError> {
        self.calls.borrow_mut().push(user_id.to_string());
        if let Some(activation) = self.dispose_during_call.borrow().as_ref() {
            activation.dispose();
        }
        self.result.clone()
    }
}

pub struct FakeNotificationApi {
    result: Result<(), ApiError>,
    pub tokens: RefCell<Vec<String>>,
    pub dispose_during_call: RefCell<Option<Activation>>,
}

impl FakeNotificationApi {
    pub fn returning(result: Result<(), ApiError>) -> Rc<Self> {
        Rc::new(Self {
            result,
            tokens: RefCell::new(Vec::new()),
            dispose_during_call: RefCell::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.tokens.borrow().len()
    }
}

#[async_trait(?Send)]
impl NotificationApi for FakeNotificationApi {
    async fn verify_participant_email(
        &self,
        request: &VerifyParticipantEmailRequest,
    ) -> Result<(), ApiError> {
        self.tokens.borrow_mut().push(request.token.clone());
        if let Some(activation) = self.dispose_during_call.borrow().as_ref() {
            activation.dispose();
        }
        self.result.clone()
    }
}

#[derive(Default)]
pub struct FakeRouter {
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub navigations: RefCell<Vec<Destination>>,
}

impl FakeRouter {
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_string(), value.to_string());
        self
    }
}

impl Router for FakeRouter {
    fn route_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn navigate(&self, to: Destination) {
        self.navigations.borrow_mut().push(to);
    }
}

#[derive(Default)]
pub struct FakeToasts {
    pub errors: RefCell<Vec<String>>,
}

impl Toasts for FakeToasts {
    fn error(&self, message: String) {
        self.errors.borrow_mut().push(message);
    }
}

/// English strings for the keys the tests look at, with `{param}` interpolation.
pub struct FakeTranslator;

impl Translator for FakeTranslator {
    fn translate(&self, key: MessageKey, params: &[(&str, String)]) -> String {
        let template = match key {
            MessageKey::UserCalendarsCountOne => "{count} calendar",
            MessageKey::UserCalendarsCountOther => "{count} calendars",
            MessageKey::UserCalendarsMissingUser => "No user selected",
            MessageKey::UserCalendarsLoadFailed => "Could not load calendars",
            MessageKey::VerifyEmailSuccess => "Email verified",
            MessageKey::VerifyEmailInvalidToken => "Invalid verification link",
            MessageKey::VerifyEmailExpired => "This link has expired or is invalid",
            MessageKey::VerifyEmailError => "Verification failed",
            other => other.as_str(),
        };
        params
            .iter()
            .fold(template.to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{}}}", name), value)
            })
    }
}

pub struct FakeSession {
    pub locale: Option<String>,
    pub reads: Cell<usize>,
}

impl FakeSession {
    pub fn new(locale: Option<&str>) -> Self {
        Self {
            locale: locale.map(str::to_string),
            reads: Cell::new(0),
        }
    }
}

impl Session for FakeSession {
    fn locale(&self) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.locale.clone()
    }
}

pub fn calendar(name: &str, participants: usize) -> CalendarSummary {
    CalendarSummary {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        participants: (0..participants)
            .map(|i| Participant {
                id: Uuid::new_v4(),
                name: format!("{} member {}", name, i + 1),
            })
            .collect(),
        threshold: 2,
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
        public_token: format!("{}-public", name),
    }
}
