//! Accessible description of a [`NavDropdown`](super::NavDropdown).
//! The component renders this description as-is.
use super::nav_dropdown_state::NavDropdownState;
use crate::types::NavOption;
use yew::AttrValue;

/// Value of the trigger's `aria-haspopup` attribute.
pub const HAS_POPUP: &str = "menu";

/// Formats a flag as an ARIA boolean attribute value.
pub fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct TriggerView {
    /// Visible text of the trigger.
    pub label: AttrValue,

    /// `aria-expanded`.
    pub expanded: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MenuItemView {
    pub index: usize,
    pub label: AttrValue,
    pub time_ago: AttrValue,
    pub description: AttrValue,

    /// `aria-current`.
    pub current: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavDropdownView {
    pub trigger: TriggerView,

    /// Menu entries, `None` while the menu is closed.
    pub menu: Option<Vec<MenuItemView>>,
}

impl NavDropdownView {
    pub fn render(
        state: &NavDropdownState,
        options: &[NavOption],
        placeholder: &AttrValue,
    ) -> Self {
        let trigger = TriggerView {
            label: state
                .selected()
                .cloned()
                .unwrap_or_else(|| placeholder.clone()),
            expanded: state.is_open(),
        };

        let menu = state.is_open().then(|| {
            options
                .iter()
                .enumerate()
                .map(|(index, option)| MenuItemView {
                    index,
                    label: option.label.clone().into(),
                    time_ago: option.time_ago.clone().into(),
                    description: option.description.clone().into(),
                    current: state.highlighted() == Some(index),
                })
                .collect()
        });

        Self { trigger, menu }
    }
}

#[cfg(test)]
#[path = "./nav_dropdown_view_test.rs"]
mod nav_dropdown_view_test;
