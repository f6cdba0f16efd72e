use super::*;

#[test]
fn new_spinner_test() {
    let spinner = Spinner::new("a", "task a");

    assert_eq!("a", spinner.name());
    assert_eq!("task a", spinner.label());
    assert_eq!(SpinnerState::Incomplete, spinner.state());
    assert!(spinner.rendered().is_empty());
}

#[test]
fn terminal_states_test() {
    assert!(!SpinnerState::Incomplete.is_terminal());
    assert!(SpinnerState::Success.is_terminal());
    assert!(SpinnerState::Error.is_terminal());
}

#[test]
fn complete_overwrites_state_test() {
    let mut spinner = Spinner::new("a", "task a");

    spinner.complete(SpinnerState::Success);
    assert_eq!(SpinnerState::Success, spinner.state());

    spinner.complete(SpinnerState::Error);
    assert_eq!(SpinnerState::Error, spinner.state());

    spinner.complete(SpinnerState::Error);
    assert_eq!(SpinnerState::Error, spinner.state());
}
