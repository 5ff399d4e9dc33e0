//! Main application.
use crate::routes::{switch, Route};
use crate::versions::{label_for_path, load_versions};
use waypoint_ui::components::NavDropdown;
use waypoint_ui::types::NavOption;
use yew::prelude::*;
use yew_router::prelude::*;

// *********************
// *** App Component ***
// *********************

#[function_component(App)]
pub fn app() -> Html {
    let versions = use_memo((), |_| load_versions());

    let versions = match versions.as_ref() {
        Ok(versions) => versions.clone(),
        Err(err) => {
            tracing::error!(%err, "could not load versions");
            return html! {
                <div class={classes!("error")}>{ "Could not load versions." }</div>
            };
        }
    };

    html! {
        <BrowserRouter>
            <Header {versions} />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

// **************
// *** Header ***
// **************

#[derive(Properties, PartialEq)]
struct HeaderProps {
    versions: Vec<NavOption>,
}

/// Navigation bar.
/// The dropdown follows the current location.
#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let location = use_location();
    let selected_option = location
        .as_ref()
        .and_then(|location| label_for_path(&props.versions, location.path()))
        .map(|label| AttrValue::from(label.to_string()));

    html! {
        <header>
            <nav>
                <NavDropdown
                    options={props.versions.clone()}
                    {selected_option}
                    placeholder="Versions" />
            </nav>
        </header>
    }
}
