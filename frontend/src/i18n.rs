use std::rc::Rc;

use rust_i18n::t;
use view_core::{MessageKey, Session, Translator};
use yew::prelude::*;

const FALLBACK_LOCALE: &str = "en";

/// Message lookup backed by the bundled `locales/*.json` files.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locale: String,
}

impl Catalog {
    /// Uses the viewer's preferred language when a catalog exists for it.
    pub fn for_session(session: &dyn Session) -> Self {
        Self::for_locale(session.locale().as_deref())
    }

    pub fn for_locale(preferred: Option<&str>) -> Self {
        let available = rust_i18n::available_locales!();
        let locale = preferred
            .map(|tag| tag.trim().replace('_', "-"))
            .and_then(|tag| {
                let language = tag.split('-').next().unwrap_or_default().to_lowercase();
                [tag, language]
                    .into_iter()
                    .find(|candidate| available.contains(&candidate.as_str()))
            })
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());

        tracing::debug!(locale = %locale, "Selected message catalog");
        Self { locale }
    }

    /// Translates `key`, substituting `%{name}` placeholders from `params`.
    pub fn lookup(&self, key: &str, params: &[(&str, String)]) -> String {
        let message = t!(key, locale = self.locale.as_str());
        if params.is_empty() {
            return message.into_owned();
        }

        let (names, values): (Vec<&str>, Vec<String>) = params.iter().cloned().unzip();
        rust_i18n::replace_patterns(&message, &names, &values)
    }

    pub fn text(&self, key: &str) -> String {
        self.lookup(key, &[])
    }
}

impl Translator for Catalog {
    fn translate(&self, key: MessageKey, params: &[(&str, String)]) -> String {
        self.lookup(key.as_str(), params)
    }
}

/// Catalog provided by the app root, or the fallback-language one.
#[hook]
pub fn use_catalog() -> Rc<Catalog> {
    let provided = use_context::<Rc<Catalog>>();
    let fallback = use_memo((), |_| Catalog::for_locale(None));
    provided.unwrap_or(fallback)
}
