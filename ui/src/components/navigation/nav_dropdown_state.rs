//! Interaction state of a [`NavDropdown`](super::NavDropdown).
use crate::types::NavOption;
use yew::AttrValue;

/// Input events understood by the dropdown.
#[derive(Clone, PartialEq, Debug)]
pub enum NavDropdownEvent {
    /// Trigger was activated.
    Toggle,

    /// Move the highlight down, wrapping to the first entry.
    HighlightNext,

    /// Move the highlight up, wrapping to the last entry.
    HighlightPrevious,

    /// Commit the highlighted entry.
    /// Closes the menu without committing if nothing is highlighted.
    CommitHighlighted,

    /// Commit the entry at the given index.
    Commit(usize),

    /// Replace the selected label.
    SetSelected(Option<AttrValue>),

    /// The option list changed.
    /// Clears a highlight that no longer points at an option.
    OptionsChanged,
}

impl NavDropdownEvent {
    /// Maps a `KeyboardEvent.key` value to an event.
    /// Returns `None` for keys the dropdown does not handle.
    ///
    /// Keys are only mapped while the menu is open.
    /// Enter and Space on the closed trigger are left to the button's
    /// native activation, which arrives as a click.
    pub fn from_key(key: &str, is_open: bool) -> Option<Self> {
        if !is_open {
            return None;
        }

        match key {
            "Enter" => Some(Self::CommitHighlighted),
            "ArrowDown" => Some(Self::HighlightNext),
            "ArrowUp" => Some(Self::HighlightPrevious),
            _ => None,
        }
    }
}

/// Navigation requested by a commit.
#[derive(Clone, PartialEq, Debug)]
pub struct Commit {
    /// Index of the committed option.
    pub index: usize,
    pub href: AttrValue,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct NavDropdownState {
    is_open: bool,
    highlighted: Option<usize>,
    selected: Option<AttrValue>,
}

impl NavDropdownState {
    pub fn new(selected: Option<AttrValue>) -> Self {
        Self {
            is_open: false,
            highlighted: None,
            selected,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Label displayed on the trigger.
    pub fn selected(&self) -> Option<&AttrValue> {
        self.selected.as_ref()
    }

    /// Computes the state following `event`.
    /// The returned [`Commit`] is the navigation the caller must perform.
    pub fn transition(
        &self,
        event: NavDropdownEvent,
        options: &[NavOption],
    ) -> (Self, Option<Commit>) {
        let mut next = self.clone();
        let count = options.len();
        match event {
            NavDropdownEvent::Toggle => {
                next.is_open = !self.is_open;
                next.highlighted = None;
            }

            NavDropdownEvent::HighlightNext => {
                if self.is_open && count > 0 {
                    next.highlighted = Some(match self.highlighted {
                        Some(index) => (index + 1) % count,
                        None => 0,
                    });
                }
            }

            NavDropdownEvent::HighlightPrevious => {
                if self.is_open && count > 0 {
                    next.highlighted = Some(match self.highlighted {
                        Some(index) if index > 0 && index < count => index - 1,
                        _ => count - 1,
                    });
                }
            }

            NavDropdownEvent::CommitHighlighted => {
                if !self.is_open {
                    return (next, None);
                }

                match self.highlighted {
                    Some(index) if index < count => return self.commit(index, options),
                    _ => {
                        next.is_open = false;
                        next.highlighted = None;
                    }
                }
            }

            NavDropdownEvent::Commit(index) => {
                if self.is_open {
                    return self.commit(index, options);
                }
            }

            NavDropdownEvent::SetSelected(selected) => {
                next.selected = selected;
            }

            NavDropdownEvent::OptionsChanged => {
                if self.highlighted.is_some_and(|index| index >= count) {
                    next.highlighted = None;
                }
            }
        }

        (next, None)
    }

    fn commit(&self, index: usize, options: &[NavOption]) -> (Self, Option<Commit>) {
        let Some(option) = options.get(index) else {
            return (self.clone(), None);
        };

        let next = Self {
            is_open: false,
            highlighted: None,
            selected: Some(AttrValue::from(option.label.clone())),
        };

        let commit = Commit {
            index,
            href: AttrValue::from(option.href.clone()),
        };

        (next, Some(commit))
    }
}

#[cfg(test)]
#[path = "./nav_dropdown_state_test.rs"]
mod nav_dropdown_state_test;
