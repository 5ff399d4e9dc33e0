use super::*;
use fake::faker::lorem::raw::Words;
use fake::locales::EN;
use fake::Fake;

#[test]
fn validate_options_should_work() {
    // --- normal cases ---
    let options = create_options(5);
    assert_eq!(Ok(()), validate_options(&options), "options should be valid");

    let options = create_options(1);
    assert_eq!(Ok(()), validate_options(&options), "single option should be valid");

    // --- exceptional cases ---
    assert_eq!(
        Err(Error::NoOptions),
        validate_options(&[]),
        "empty options should be invalid"
    );

    let mut options = create_options(3);
    let mut duplicate = options[0].clone();
    duplicate.href = "/elsewhere".to_string();
    options.push(duplicate);
    assert_eq!(
        Err(Error::DuplicateLabel(options[0].label.clone())),
        validate_options(&options),
        "duplicate label should be reported"
    );
}

#[test]
fn nav_option_should_deserialize_camel_case() {
    let json = r#"{
        "label": "Version 1",
        "timeAgo": "1 day ago",
        "description": "stable",
        "href": "/v1"
    }"#;

    let option: NavOption = serde_json::from_str(json).expect("option should deserialize");
    assert_eq!(
        NavOption::new("Version 1", "1 day ago", "stable", "/v1"),
        option
    );

    let missing_href = r#"{ "label": "Version 1", "timeAgo": "now", "description": "" }"#;
    assert!(
        serde_json::from_str::<NavOption>(missing_href).is_err(),
        "href should be required"
    );
}

// ***************
// *** helpers ***
// ***************

fn create_options(num: usize) -> Vec<NavOption> {
    (0..num)
        .map(|index| {
            let words: Vec<String> = Words(EN, 1..4).fake();
            NavOption::new(
                format!("{} {index}", words.join(" ")),
                "1 day ago",
                words.join(" "),
                format!("/v{index}"),
            )
        })
        .collect()
}
