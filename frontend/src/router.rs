use view_core::Destination;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    admin::Admin, admin_user_calendars::AdminUserCalendars, home::Home, not_found::NotFound,
    verify_email::VerifyParticipantEmail,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[at("/admin/users/:user_id/calendars")]
    AdminUserCalendars { user_id: String },
    #[at("/verify-email/:token")]
    VerifyParticipantEmail { token: String },
    #[at("/verify-email")]
    VerifyParticipantEmailWithoutToken,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// In-app route for a destination; `None` for pages served outside this app.
    pub fn for_destination(destination: &Destination) -> Option<Self> {
        match destination {
            Destination::Home => Some(Route::Home),
            Destination::AdminHome => Some(Route::Admin),
            Destination::AdminCalendarEdit { .. } | Destination::PublicCalendar { .. } => None,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Admin => html! { <Admin /> },
        Route::AdminUserCalendars { user_id } => html! { <AdminUserCalendars {user_id} /> },
        Route::VerifyParticipantEmail { token } => html! { <VerifyParticipantEmail {token} /> },
        Route::VerifyParticipantEmailWithoutToken => {
            html! { <VerifyParticipantEmail token={String::new()} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}
