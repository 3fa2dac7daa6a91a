use gloo::storage::{LocalStorage, Storage};
use view_core::Session;

const LOCALE_KEY: &str = "preferred_locale";
const ACCESS_TOKEN_KEY: &str = "access_token";

/// Viewer preferences and credentials persisted by the login flow in local storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn access_token(&self) -> Option<String> {
        read(ACCESS_TOKEN_KEY)
    }
}

impl Session for BrowserSession {
    fn locale(&self) -> Option<String> {
        read(LOCALE_KEY)
    }
}

fn read(key: &str) -> Option<String> {
    LocalStorage::get::<String>(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
