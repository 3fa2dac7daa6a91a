use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_catalog;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let catalog = use_catalog();

    html! {
        <header class="header">
            <div class="container">
                <h1>{ catalog.text("app.title") }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ catalog.text("nav.home") }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Admin}>{ catalog.text("nav.admin") }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
