use yew::prelude::*;
use yew_router::prelude::*;

// Routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Landing page, no version selected.
    #[at("/")]
    Index,

    /// A single version, e.g. `/v1`.
    #[at("/:version")]
    Version { version: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Index => html! {
            <p>{ "Choose a version from the menu." }</p>
        },
        Route::Version { version } => html! {
            <article class={classes!("version")}>
                <h1>{ version }</h1>
            </article>
        },
        Route::NotFound => html! {
            <p>{ "Page not found." }</p>
        },
    }
}
