//! Navigation drop-down.
//! A trigger button opening a menu of navigation targets.
use super::nav_dropdown_state::NavDropdownEvent;
use super::nav_dropdown_view::{aria_bool, MenuItemView, NavDropdownView, HAS_POPUP};
use crate::hooks::{use_goto, use_nav_dropdown};
use crate::types::NavOption;
use yew::prelude::*;

/// [`NavDropdown`] properties.
#[derive(Properties, PartialEq)]
pub struct NavDropdownProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,

    #[prop_or_default]
    pub class: Classes,

    /// Navigation targets, in display order.
    /// Labels are expected to be unique.
    pub options: Vec<NavOption>,

    /// Label shown on the trigger until an option is committed.
    #[prop_or_default]
    pub selected_option: Option<AttrValue>,

    /// Trigger text when no option is selected.
    #[prop_or(AttrValue::Static("Select"))]
    pub placeholder: AttrValue,

    /// Called with the option's `href` on commit.
    /// Defaults to pushing the path onto the router's history.
    #[prop_or_default]
    pub ongoto: Option<Callback<AttrValue>>,
}

/// Navigation drop-down.
#[function_component(NavDropdown)]
pub fn nav_dropdown(props: &NavDropdownProps) -> Html {
    let goto = use_goto(props.ongoto.clone());
    let dropdown = use_nav_dropdown(props.options.clone(), props.selected_option.clone(), goto);

    let view = NavDropdownView::render(&dropdown.state, &props.options, &props.placeholder);

    let onclick_trigger = {
        let dispatch = dropdown.dispatch.clone();

        Callback::from(move |_: MouseEvent| {
            dispatch.emit(NavDropdownEvent::Toggle);
        })
    };

    let onkeydown = {
        let dispatch = dropdown.dispatch.clone();
        let is_open = dropdown.is_open.clone();

        Callback::from(move |e: KeyboardEvent| {
            let Some(event) = NavDropdownEvent::from_key(&e.key(), is_open()) else {
                return;
            };

            // keep the browser from synthesizing a click on the trigger
            e.prevent_default();
            dispatch.emit(event);
        })
    };

    let onclick_item = {
        let dispatch = dropdown.dispatch.clone();

        move |index: usize| -> Callback<MouseEvent> {
            let dispatch = dispatch.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                dispatch.emit(NavDropdownEvent::Commit(index));
            })
        }
    };

    html! {
        <div id={props.id.clone()}
            class={classes!("waypoint-ui-nav-dropdown", props.class.clone())}
            {onkeydown}>

            <button type="button"
                class={classes!("nav-dropdown-trigger", "clickable")}
                aria-haspopup={HAS_POPUP}
                aria-expanded={aria_bool(view.trigger.expanded)}
                onclick={onclick_trigger}>

                <span class={classes!("title")}>{ &view.trigger.label }</span>
                <span class={classes!("collapsed-indicator")}>
                    if view.trigger.expanded {
                        { "\u{02c4}" }
                    } else {
                        { "\u{02c5}" }
                    }
                </span>
            </button>

            if let Some(items) = view.menu {
                <ul role="menu" class={classes!("nav-dropdown-menu")}>
                    { items
                        .into_iter()
                        .map(|item| {
                            let onclick = onclick_item(item.index);
                            menu_item(item, onclick)
                        })
                        .collect::<Html>()
                    }
                </ul>
            }
        </div>
    }
}

fn menu_item(item: MenuItemView, onclick: Callback<MouseEvent>) -> Html {
    let class = classes!(
        "nav-dropdown-item",
        "clickable",
        item.current.then_some("highlighted")
    );

    html! {
        <li key={item.index}
            role="menuitem"
            aria-current={aria_bool(item.current)}
            {class}
            {onclick}>

            <span class={classes!("label")}>{ &item.label }</span>
            <span class={classes!("time-ago")}>{ &item.time_ago }</span>
            <span class={classes!("description")}>{ &item.description }</span>
        </li>
    }
}
