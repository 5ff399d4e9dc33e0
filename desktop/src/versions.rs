//! Version list shown in the navigation bar.
use crate::Result;
use waypoint_ui::types::NavOption;

const VERSIONS: &str = include_str!("../assets/versions.json");

/// Loads the bundled version list.
pub fn load_versions() -> Result<Vec<NavOption>> {
    parse_versions(VERSIONS)
}

/// Parses a JSON array of navigation options.
pub fn parse_versions(json: &str) -> Result<Vec<NavOption>> {
    Ok(serde_json::from_str(json)?)
}

/// Label of the option targeting `path`, if any.
pub fn label_for_path<'a>(versions: &'a [NavOption], path: &str) -> Option<&'a str> {
    versions
        .iter()
        .find(|version| version.href == path)
        .map(|version| version.label.as_str())
}

#[cfg(test)]
#[path = "./versions_test.rs"]
mod versions_test;
