//! Binds a [`NavDropdownState`] to a component.
use crate::components::navigation::{Commit, NavDropdownEvent, NavDropdownState};
use crate::types::{validate_options, NavOption};
use std::rc::Rc;
use yew::prelude::*;

pub struct UseNavDropdownHandle {
    /// State as of the current render.
    pub state: NavDropdownState,

    /// Applies an event, re-rendering on change.
    pub dispatch: Callback<NavDropdownEvent>,

    /// Whether the menu is open at the time of the call.
    pub is_open: Rc<dyn Fn() -> bool>,
}

/// Dropdown state for `options`.
/// `goto` is called with the target path whenever an option is committed.
///
/// The state lives in a mutable cell so events dispatched before
/// the next render see each other's effects.
#[hook]
pub fn use_nav_dropdown(
    options: Vec<NavOption>,
    selected: Option<AttrValue>,
    goto: Callback<AttrValue>,
) -> UseNavDropdownHandle {
    let state = use_mut_ref(|| NavDropdownState::new(selected.clone()));
    let update = use_force_update();

    {
        // follow the `selected` prop
        let state = state.clone();
        let update = update.clone();

        use_effect_with(selected, move |selected| {
            let next = {
                let current = state.borrow();
                (current.selected() != selected.as_ref()).then(|| {
                    let (next, _) = current
                        .transition(NavDropdownEvent::SetSelected(selected.clone()), &[]);
                    next
                })
            };

            if let Some(next) = next {
                *state.borrow_mut() = next;
                update.force_update();
            }
        });
    }

    let dispatch = {
        let state = state.clone();
        let options = Rc::new(options.clone());

        Callback::from(move |event: NavDropdownEvent| {
            tracing::debug!(?event);
            let (next, commit) = state.borrow().transition(event, &options);
            if *state.borrow() != next {
                *state.borrow_mut() = next;
                update.force_update();
            }

            if let Some(Commit { index, href }) = commit {
                tracing::info!(index, %href, "navigating");
                goto.emit(href);
            }
        })
    };

    {
        let dispatch = dispatch.clone();

        use_effect_with(options, move |options| {
            if let Err(err) = validate_options(options) {
                tracing::warn!(%err, "invalid navigation options");
            }

            dispatch.emit(NavDropdownEvent::OptionsChanged);
        });
    }

    let is_open: Rc<dyn Fn() -> bool> = {
        let state = state.clone();
        Rc::new(move || state.borrow().is_open())
    };

    let state = state.borrow().clone();
    UseNavDropdownHandle {
        state,
        dispatch,
        is_open,
    }
}
