mod common;

use common::Scripted;
use lesspass::error::LesspassError;
use lesspass::master::MasterPasswordSources;

fn sources<'a>(
    positional: Option<&str>,
    environment: Option<&'a str>,
    prompt: bool,
) -> MasterPasswordSources<'a> {
    MasterPasswordSources {
        positional: positional.map(ToOwned::to_owned),
        environment,
        prompt,
    }
}

#[test]
fn positional_wins_over_environment() {
    let mut prompt = Scripted::new(&["typed"]);
    let secret = sources(Some("secret"), Some("envsecret"), true)
        .resolve(&mut prompt)
        .unwrap();

    assert_eq!(secret.expose(), "secret");
    assert!(prompt.asked.is_empty());
}

#[test]
fn environment_fallback() {
    let secret = sources(None, Some("envsecret"), false)
        .resolve(Scripted::default())
        .unwrap();
    assert_eq!(secret.expose(), "envsecret");
}

#[test]
fn environment_wins_over_prompt() {
    let mut prompt = Scripted::new(&["typed"]);
    let secret = sources(None, Some("envsecret"), true)
        .resolve(&mut prompt)
        .unwrap();

    assert_eq!(secret.expose(), "envsecret");
    assert!(prompt.asked.is_empty());
}

#[test]
fn empty_values_count_as_absent() {
    let secret = sources(Some(""), Some("envsecret"), false)
        .resolve(Scripted::default())
        .unwrap();
    assert_eq!(secret.expose(), "envsecret");

    let mut prompt = Scripted::new(&["typed"]);
    let secret = sources(Some(""), Some(""), true)
        .resolve(&mut prompt)
        .unwrap();
    assert_eq!(secret.expose(), "typed");
    assert_eq!(prompt.asked, vec!["Master Password: "]);
}

#[test]
fn prompt_only_when_requested() {
    let mut prompt = Scripted::new(&["typed"]);
    let err = sources(None, None, false).resolve(&mut prompt).unwrap_err();

    assert!(matches!(err, LesspassError::MissingMasterPassword));
    assert!(prompt.asked.is_empty());
}

#[test]
fn empty_prompt_answer() {
    let err = sources(None, None, true)
        .resolve(Scripted::new(&[""]))
        .unwrap_err();
    assert!(matches!(err, LesspassError::MissingMasterPassword));
}

#[test]
fn prompt_abort() {
    let err = sources(None, None, true)
        .resolve(Scripted::default())
        .unwrap_err();
    assert!(matches!(err, LesspassError::UserAbort));
}

#[test]
fn debug_hides_secret() {
    let secret = sources(Some("hunter2"), None, false)
        .resolve(Scripted::default())
        .unwrap();
    assert!(!format!("{:?}", secret).contains("hunter2"));
}
