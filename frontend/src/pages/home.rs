use yew::prelude::*;

use crate::i18n::use_catalog;

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_catalog();

    html! {
        <div class="container">
            <h2>{ catalog.text("home.heading") }</h2>
            <p>{ catalog.text("home.intro") }</p>
        </div>
    }
}
