//! Navigation options.
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// A navigation target shown as an entry of a [`NavDropdown`](crate::components::navigation::NavDropdown).
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NavOption {
    /// Display name, also used to match the selected option.
    pub label: String,

    /// Human readable age, e.g. `"1 day ago"`.
    pub time_ago: String,

    pub description: String,

    /// Path passed to the navigator on commit.
    pub href: String,
}

impl NavOption {
    pub fn new(
        label: impl Into<String>,
        time_ago: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            time_ago: time_ago.into(),
            description: description.into(),
            href: href.into(),
        }
    }
}

/// Checks that an option list can be used by a dropdown.
///
/// # Errors
/// + [`Error::NoOptions`] if `options` is empty.
/// + [`Error::DuplicateLabel`] for the first label that appears twice.
pub fn validate_options(options: &[NavOption]) -> Result {
    if options.is_empty() {
        return Err(Error::NoOptions);
    }

    let mut labels = HashSet::with_capacity(options.len());
    for option in options {
        if !labels.insert(option.label.as_str()) {
            return Err(Error::DuplicateLabel(option.label.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "./nav_option_test.rs"]
mod nav_option_test;
