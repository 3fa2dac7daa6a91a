use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_catalog;
use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let catalog = use_catalog();

    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ catalog.text("not_found.heading") }</h2>
                <p>{ catalog.text("not_found.body") }</p>
                <Link<Route> to={Route::Home}>
                    <button class="btn btn-primary">{ catalog.text("not_found.home") }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
