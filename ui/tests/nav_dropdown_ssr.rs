#![cfg(not(target_arch = "wasm32"))]
//! Markup of `NavDropdown` as first rendered.
use waypoint_ui::components::navigation::{NavDropdown, NavDropdownProps};
use waypoint_ui::types::NavOption;
use yew::prelude::*;
use yew::LocalServerRenderer;

#[tokio::test]
async fn trigger_should_control_menu() {
    let html = render(yew::props!(NavDropdownProps {
        options: version_options()
    }))
    .await;

    assert!(html.contains("<button"), "trigger should be a button: {html}");
    assert!(html.contains(r#"aria-haspopup="menu""#), "{html}");
    assert!(html.contains(r#"aria-expanded="false""#), "{html}");
    assert!(!html.contains(r#"role="menu""#), "menu should be closed: {html}");
    assert!(!html.contains(r#"role="menuitem""#), "{html}");
}

#[tokio::test]
async fn trigger_should_show_placeholder() {
    let html = render(yew::props!(NavDropdownProps {
        options: version_options()
    }))
    .await;
    assert!(html.contains("Select"), "{html}");

    let html = render(yew::props!(NavDropdownProps {
        options: version_options(),
        placeholder: AttrValue::from("Choose a version")
    }))
    .await;
    assert!(html.contains("Choose a version"), "{html}");
}

#[tokio::test]
async fn trigger_should_show_selected_option() {
    let html = render(yew::props!(NavDropdownProps {
        options: version_options(),
        selected_option: Some(AttrValue::from("Version 2"))
    }))
    .await;

    assert!(html.contains("Version 2"), "{html}");
    assert!(!html.contains("Select"), "placeholder should be hidden: {html}");
}

#[tokio::test]
async fn empty_options_should_render() {
    let html = render(yew::props!(NavDropdownProps { options: vec![] })).await;
    assert!(html.contains(r#"aria-expanded="false""#), "{html}");
}

// ***************
// *** helpers ***
// ***************

async fn render(props: NavDropdownProps) -> String {
    LocalServerRenderer::<NavDropdown>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

fn version_options() -> Vec<NavOption> {
    vec![
        NavOption::new("Version 1", "1 day ago", "stable", "/v1"),
        NavOption::new("Version 2", "5 hours ago", "latest", "/v2"),
    ]
}
