use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_catalog;
use crate::router::Route;

/// Admin landing page: look up a user's calendars by id.
#[function_component(Admin)]
pub fn admin() -> Html {
    let catalog = use_catalog();
    let navigator = use_navigator();
    let user_id = use_state(String::new);

    let on_input = {
        let user_id = user_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_id.set(input.value());
        })
    };

    let on_submit = {
        let user_id = user_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = user_id.trim().to_string();
            if id.is_empty() {
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::AdminUserCalendars { user_id: id });
            }
        })
    };

    html! {
        <div class="container">
            <h2>{ catalog.text("admin.heading") }</h2>
            <form class="user-lookup" onsubmit={on_submit}>
                <label for="user-id">{ catalog.text("admin.user_lookup.label") }</label>
                <input id="user-id" type="text" value={(*user_id).clone()} oninput={on_input} />
                <button type="submit" class="btn btn-primary">
                    { catalog.text("admin.user_lookup.submit") }
                </button>
            </form>
        </div>
    }
}
