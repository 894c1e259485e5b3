#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end assembly tests: scheme and action validation, reserved
//! parameter ordering, and the exact wire form of generated URLs.

use xcallback::{Action, BuildError, Callback, CallbackError, Callbacks, xcallback_url};

const SCHEME: &str = "x-callback-scheme";

fn cancel_callback() -> Callback {
    Callback::new("buzz://cancel-host").unwrap()
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_all_callbacks_and_source_precede_action_parameters() {
    let action = Action::with_parameters("action", params(&[("param1", "value1")])).unwrap();
    let callbacks = Callbacks::new()
        .with_source("source-value")
        .on_success(Callback::new("foo://success-host").unwrap())
        .on_error(Callback::new("bar://error-host").unwrap())
        .on_cancel(cancel_callback());

    let url = xcallback_url(SCHEME, &action, &callbacks).unwrap();
    assert_eq!(
        url,
        "x-callback-scheme://x-callback-url/action\
         ?x-source=source-value\
         &x-success=foo://success-host\
         &x-error=bar://error-host\
         &x-cancel=buzz://cancel-host\
         &param1=value1"
    );
}

#[test]
fn test_cancel_callback_only() {
    let action = Action::new("action").unwrap();
    let callbacks = Callbacks::new().on_cancel(cancel_callback());

    let url = xcallback_url(SCHEME, &action, &callbacks).unwrap();
    assert_eq!(
        url,
        "x-callback-scheme://x-callback-url/action?x-cancel=buzz://cancel-host"
    );
}

#[test]
fn test_cancel_callback_with_action_parameters() {
    let action = Action::with_parameters("action", params(&[("param1", "value1")])).unwrap();
    let callbacks = Callbacks::new().on_cancel(cancel_callback());

    let url = xcallback_url(SCHEME, &action, &callbacks).unwrap();
    assert_eq!(
        url,
        "x-callback-scheme://x-callback-url/action?x-cancel=buzz://cancel-host&param1=value1"
    );
}

#[test]
fn test_empty_action_fails() {
    assert_eq!(Action::new(""), Err(BuildError::InvalidAction(String::new())));
}

#[test]
fn test_action_with_invalid_path_character_fails() {
    assert_eq!(
        Action::new("action#withInvalidCharacter"),
        Err(BuildError::InvalidAction(
            "action#withInvalidCharacter".to_string()
        ))
    );
}

#[test]
fn test_empty_scheme_fails() {
    let action = Action::new("action").unwrap();
    let callbacks = Callbacks::new().on_cancel(cancel_callback());
    assert_eq!(
        xcallback_url("", &action, &callbacks),
        Err(BuildError::InvalidScheme)
    );
}

#[test]
fn test_invalid_scheme_fails() {
    let action = Action::new("action").unwrap();
    let callbacks = Callbacks::new().on_cancel(cancel_callback());
    assert_eq!(
        xcallback_url("1scheme", &action, &callbacks),
        Err(BuildError::InvalidScheme)
    );
    assert_eq!(
        xcallback_url("sche me", &action, &callbacks),
        Err(BuildError::InvalidScheme)
    );
}

#[test]
fn test_slash_prefixed_action_keeps_single_slash() {
    let action = Action::new("/action").unwrap();
    let callbacks = Callbacks::new().on_cancel(cancel_callback());

    let url = xcallback_url(SCHEME, &action, &callbacks).unwrap();
    assert_eq!(
        url,
        "x-callback-scheme://x-callback-url/action?x-cancel=buzz://cancel-host"
    );
}

#[test]
fn test_denied_parameter_names_reported_in_order() {
    let result = Action::with_parameters(
        "action",
        params(&[
            ("x-param1", "value1"),
            ("param2", "value2"),
            ("x-param3", "value3"),
        ]),
    );
    assert_eq!(
        result,
        Err(BuildError::DeniedParameterNames(vec![
            "x-param1".to_string(),
            "x-param3".to_string(),
        ]))
    );
}

#[test]
fn test_empty_callback_set_builds_bare_url() {
    let action = Action::new("action").unwrap();
    let url = xcallback_url(SCHEME, &action, &Callbacks::new()).unwrap();
    assert_eq!(url, "x-callback-scheme://x-callback-url/action");
}

#[test]
fn test_empty_source_is_skipped() {
    let action = Action::new("action").unwrap();
    let callbacks = Callbacks::new().with_source("").on_cancel(cancel_callback());

    let url = xcallback_url(SCHEME, &action, &callbacks).unwrap();
    assert_eq!(
        url,
        "x-callback-scheme://x-callback-url/action?x-cancel=buzz://cancel-host"
    );
}

#[test]
fn test_callback_url_round_trip() {
    let url = "foo://success-host/done?id=1";
    assert_eq!(Callback::new(url).unwrap().url(), url);
}

#[test]
fn test_callback_without_scheme_fails() {
    assert_eq!(
        Callback::new("//success-host"),
        Err(CallbackError::MissingScheme)
    );
}

#[test]
fn test_callback_without_host_fails() {
    assert_eq!(Callback::new("foo://"), Err(CallbackError::MissingHost));
}

#[test]
fn test_action_parameter_values_are_query_encoded() {
    let action =
        Action::with_parameters("add-note", params(&[("text", "hello world & more")])).unwrap();
    let url = xcallback_url("bear", &action, &Callbacks::new()).unwrap();
    assert_eq!(
        url,
        "bear://x-callback-url/add-note?text=hello%20world%20%26%20more"
    );
}
