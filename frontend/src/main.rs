mod components;
mod config;
mod i18n;
mod pages;
mod router;
mod services;
mod session;

use std::rc::Rc;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::components::toast::ToastProvider;
use crate::config::AppConfig;
use crate::i18n::Catalog;
use crate::router::{switch, Route};
use crate::session::BrowserSession;

rust_i18n::i18n!("locales", fallback = "en");

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::for_session(&BrowserSession));
    let config = AppConfig::from_env();

    html! {
        <BrowserRouter>
            <ContextProvider<Rc<Catalog>> context={catalog}>
                <ToastProvider duration_ms={config.toast_duration_ms}>
                    <div id="app">
                        <components::header::Header />
                        <yew_router::Switch<Route> render={switch} />
                    </div>
                </ToastProvider>
            </ContextProvider<Rc<Catalog>>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();
    tracing::info!(api = %AppConfig::from_env().api_base_url, "Starting calendar frontend");

    yew::Renderer::<App>::new().render();
}
