use std::rc::Rc;

use view_core::user_calendars::USER_ID_PARAM;
use view_core::{
    Activation, CalendarsDisplay, MessageKey, Translator, UserCalendarsLoader, UserCalendarsState,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::calendar_card::CalendarCardView;
use crate::components::toast::use_toasts;
use crate::config::AppConfig;
use crate::i18n::use_catalog;
use crate::router::Route;
use crate::services::api::ApiService;
use crate::services::routing::use_view_router;
use crate::session::BrowserSession;

#[derive(Properties, PartialEq)]
pub struct AdminUserCalendarsProps {
    pub user_id: String,
}

#[function_component(AdminUserCalendars)]
pub fn admin_user_calendars(props: &AdminUserCalendarsProps) -> Html {
    let router = use_view_router(vec![(USER_ID_PARAM, props.user_id.clone())]);
    let toasts = use_toasts();
    let catalog = use_catalog();
    let state = use_state(|| UserCalendarsState::loading(None, None));

    {
        let state = state.clone();
        let translator: Rc<dyn Translator> = catalog.clone();

        use_effect_with(props.user_id.clone(), move |_| {
            let api = Rc::new(ApiService::new(&AppConfig::from_env()));
            let loader = UserCalendarsLoader::new(api, router, toasts, translator);
            state.set(loader.initial_state());

            let activation = Activation::new();
            let live = activation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(settled) = loader.run(&live).await {
                    state.set(settled);
                }
            });

            move || activation.dispose()
        });
    }

    let body = match state.display() {
        CalendarsDisplay::Loading => html! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        },
        CalendarsDisplay::Empty => html! {
            <div class="empty-state">
                <p>{ catalog.translate(MessageKey::UserCalendarsEmpty, &[]) }</p>
            </div>
        },
        CalendarsDisplay::Grid(_) => html! {
            <div class="calendar-grid">
                { for state.cards(&BrowserSession).into_iter().map(|card| {
                    let key = card.id.to_string();
                    html! { <CalendarCardView {key} {card} /> }
                })}
            </div>
        },
    };

    html! {
        <div class="container">
            <Link<Route> to={Route::Admin} classes={classes!("back-link")}>
                { catalog.text("admin.user_calendars.back") }
            </Link<Route>>
            <div class="page-header">
                <h2>{ state.title(&*catalog) }</h2>
                if state.shows_count() {
                    <span class="calendar-count">{ state.count_label(&*catalog) }</span>
                }
            </div>
            { body }
        </div>
    }
}
