use lesspass::classes::{CharClass, CharacterClassSet, ClassFlag, ClassFlags};
use lesspass::error::LesspassError;

fn flags(pairs: [(bool, bool); 4]) -> ClassFlags {
    let mut flags = ClassFlags::default();
    for (&class, &(enable, disable)) in CharClass::ALL.iter().zip(pairs.iter()) {
        flags.set(class, ClassFlag::from_pair(class, enable, disable).unwrap());
    }
    flags
}

#[test]
fn no_flags_enables_everything() {
    let set = ClassFlags::default().resolve().unwrap();
    assert_eq!(set, CharacterClassSet::all());
}

#[test]
fn named_classes_only() {
    // -l -u -d
    let set = flags([(true, false), (true, false), (true, false), (false, false)])
        .resolve()
        .unwrap();

    assert!(set.lowercase);
    assert!(set.uppercase);
    assert!(set.digits);
    assert!(!set.symbols);
}

#[test]
fn single_class() {
    let set = flags([(false, false), (false, false), (true, false), (false, false)])
        .resolve()
        .unwrap();

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![CharClass::Digits]);
}

#[test]
fn disable_switches_to_explicit_mode() {
    // --no-symbols alone leaves nothing enabled
    let err = flags([(false, false), (false, false), (false, false), (false, true)])
        .resolve()
        .unwrap_err();
    assert!(matches!(err, LesspassError::EmptyCharacterClassSet));

    let set = flags([(true, false), (false, false), (false, false), (false, true)])
        .resolve()
        .unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![CharClass::Lowercase]);
}

#[test]
fn everything_disabled_is_an_error() {
    let err = flags([(false, true); 4]).resolve().unwrap_err();
    assert!(matches!(err, LesspassError::EmptyCharacterClassSet));
}

#[test]
fn enable_and_disable_same_class() {
    let err = ClassFlag::from_pair(CharClass::Uppercase, true, true).unwrap_err();
    match err {
        LesspassError::MutuallyExclusiveFlags(class) => assert_eq!(class, CharClass::Uppercase),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn resolution_is_deterministic() {
    let input = flags([(true, false), (false, true), (false, false), (true, false)]);
    assert_eq!(input.resolve().unwrap(), input.resolve().unwrap());
}

#[test]
fn display_lists_enabled_classes() {
    let set = flags([(true, false), (false, false), (true, false), (false, false)])
        .resolve()
        .unwrap();
    assert_eq!(set.to_string(), "lowercase, digits");
}
