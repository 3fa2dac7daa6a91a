//! Per-calendar card view model for the admin calendar grid.

use chrono::{DateTime, Locale, Utc};
use shared::models::CalendarSummary;
use uuid::Uuid;

use crate::ports::Destination;

/// Number of participant name chips shown before collapsing into "+N".
pub const MAX_VISIBLE_PARTICIPANTS: usize = 5;

/// Locale used for dates when the viewer has no usable preference.
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCard {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub participant_count: usize,
    /// Names of the first participants, in list order.
    pub chips: Vec<String>,
    /// Participants not shown as chips; `None` when everyone fits.
    pub overflow: Option<usize>,
    pub threshold: u32,
    pub created: String,
    pub edit: Destination,
    pub public_path: String,
}

impl CalendarCard {
    pub fn new(calendar: &CalendarSummary, locale: Option<&str>) -> Self {
        let participant_count = calendar.participant_count();
        let hidden = participant_count.saturating_sub(MAX_VISIBLE_PARTICIPANTS);

        Self {
            id: calendar.id,
            name: calendar.name.clone(),
            description: calendar.description.clone(),
            participant_count,
            chips: calendar
                .participants
                .iter()
                .take(MAX_VISIBLE_PARTICIPANTS)
                .map(|p| p.name.clone())
                .collect(),
            overflow: (hidden > 0).then_some(hidden),
            threshold: calendar.threshold,
            created: format_date(&calendar.created_at, locale),
            edit: Destination::AdminCalendarEdit {
                calendar_id: calendar.id,
            },
            public_path: calendar.public_path(),
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        self.overflow.map(|n| format!("+{}", n))
    }
}

/// Formats a timestamp as a locale-specific date.
///
/// Accepts BCP 47 style tags ("de-DE") as well as POSIX ones ("de_DE"); a bare
/// language ("ja") resolves to its default territory ("ja_JP").
pub fn format_date(at: &DateTime<Utc>, locale: Option<&str>) -> String {
    let locale = locale
        .and_then(resolve_locale)
        .unwrap_or(DEFAULT_LOCALE);
    at.format_localized("%x", locale).to_string()
}

/// Default territory for languages whose primary locale is not `xx_XX`.
const DEFAULT_TERRITORIES: &[(&str, &str)] = &[
    ("ar", "ar_SA"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("et", "et_EE"),
    ("fa", "fa_IR"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("nn", "nn_NO"),
    ("pt", "pt_PT"),
    ("sl", "sl_SI"),
    ("sq", "sq_AL"),
    ("sr", "sr_RS"),
    ("sv", "sv_SE"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
    ("zh", "zh_CN"),
];

fn resolve_locale(tag: &str) -> Option<Locale> {
    let normalized = tag.trim().replace('-', "_");
    if normalized.is_empty() {
        return None;
    }

    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return Some(locale);
    }

    if normalized.contains('_') {
        return None;
    }

    let language = normalized.to_lowercase();
    let candidate = DEFAULT_TERRITORIES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, locale)| locale.to_string())
        .unwrap_or_else(|| format!("{}_{}", language, language.to_uppercase()));
    Locale::try_from(candidate.as_str()).ok()
}
