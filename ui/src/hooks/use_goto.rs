//! Navigation for components that accept an optional `goto` callback.
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::AnyRoute;

/// Returns `ongoto` if provided,
/// otherwise a callback pushing the path onto the router's history.
///
/// Paths requested without a router in context are logged and dropped.
#[hook]
pub fn use_goto(ongoto: Option<Callback<AttrValue>>) -> Callback<AttrValue> {
    let navigator = use_navigator();
    if let Some(ongoto) = ongoto {
        return ongoto;
    }

    Callback::from(move |href: AttrValue| match navigator.as_ref() {
        Some(navigator) => navigator.push(&AnyRoute::new(href.as_str())),
        None => tracing::error!(%href, "navigator not found"),
    })
}
