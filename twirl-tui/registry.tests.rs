use super::*;

#[test]
fn from_labels_test() {
    let registry = Registry::new(Spinners::from_labels(["one", "two"])).unwrap();

    assert_eq!(2, registry.len());
    assert!(!registry.is_empty());
    assert_eq!("one", registry.get("one").unwrap().label());
    assert_eq!("two", registry.get("two").unwrap().label());
}

#[test]
fn from_pairs_test() {
    let mut spinners = Spinners::from_pairs([("a", "task a")]);
    spinners.push("b", "task b");

    let registry = Registry::new(spinners).unwrap();

    assert_eq!(2, registry.len());
    assert_eq!("task b", registry.get("b").unwrap().label());
    assert_eq!(None, registry.get("c").map(Spinner::name));
}

#[test]
fn empty_spinners_test() {
    assert!(matches!(Registry::new(Spinners::default()), Err(SpinError::NoSpinners)));
}

#[test]
fn duplicate_name_test() {
    let result = Registry::new(Spinners::from_labels(["same", "other", "same"]));

    assert!(matches!(result, Err(SpinError::DuplicateSpinner(name)) if name == "same"));
}

#[test]
fn advance_frame_test() {
    let mut registry = Registry::new(Spinners::from_labels(["x"])).unwrap();

    assert_eq!(0, registry.frame_index());

    registry.advance_frame(4);
    assert_eq!(1, registry.frame_index());

    registry.advance_frame(4);
    registry.advance_frame(4);
    registry.advance_frame(4);
    assert_eq!(0, registry.frame_index());
}

#[test]
fn complete_test() {
    let mut registry = Registry::new(Spinners::from_pairs([("a", "task a"), ("b", "task b")])).unwrap();

    assert!(!registry.all_completed());

    registry.complete("a", SpinnerState::Success).unwrap();
    assert_eq!(SpinnerState::Success, registry.get("a").unwrap().state());
    assert!(!registry.all_completed());

    registry.complete("b", SpinnerState::Error).unwrap();
    assert!(registry.all_completed());
}

#[test]
fn complete_validation_test() {
    let mut registry = Registry::new(Spinners::from_labels(["a"])).unwrap();

    assert!(matches!(
        registry.complete("c", SpinnerState::Success),
        Err(SpinError::UnknownSpinner(name)) if name == "c"
    ));
    assert!(matches!(registry.complete("a", SpinnerState::Incomplete), Err(SpinError::InvalidState)));
    assert_eq!(SpinnerState::Incomplete, registry.get("a").unwrap().state());
}

#[test]
fn insertion_order_test() {
    let registry = Registry::new(Spinners::from_pairs([("z", "last"), ("a", "first")])).unwrap();
    let names: Vec<&str> = registry.iter().map(Spinner::name).collect();

    assert_eq!(vec!["z", "a"], names);
}
