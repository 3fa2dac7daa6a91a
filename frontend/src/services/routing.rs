use std::collections::HashMap;
use std::rc::Rc;

use view_core::{Destination, Router};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Router port backed by yew-router for in-app routes and a full page load otherwise.
pub struct YewRouter {
    params: HashMap<&'static str, String>,
    query: HashMap<String, String>,
    navigator: Option<Navigator>,
}

impl Router for YewRouter {
    fn route_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn navigate(&self, to: Destination) {
        if let (Some(route), Some(navigator)) = (Route::for_destination(&to), &self.navigator) {
            navigator.push(&route);
            return;
        }

        let path = to.path();
        if let Err(e) = gloo::utils::window().location().set_href(&path) {
            tracing::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}

/// Router for the current page, with the given route params already extracted.
#[hook]
pub fn use_view_router(params: Vec<(&'static str, String)>) -> Rc<dyn Router> {
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<HashMap<String, String>>().ok())
        .unwrap_or_default();

    Rc::new(YewRouter {
        params: params.into_iter().collect(),
        query,
        navigator,
    })
}
