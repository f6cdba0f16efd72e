#[cfg(test)]
#[path = "./spinner.tests.rs"]
mod spinner_tests;

/// Lifecycle state of a single spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    Incomplete,
    Success,
    Error,
}

impl SpinnerState {
    /// Returns `true` if this is the success or the error state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SpinnerState::Incomplete)
    }
}

/// Single labeled spinner line.
#[derive(Debug, Clone)]
pub struct Spinner {
    name: String,
    label: String,
    state: SpinnerState,
    rendered: String,
}

impl Spinner {
    /// Creates new [`Spinner`] in the incomplete state.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            state: SpinnerState::Incomplete,
            rendered: String::new(),
        }
    }

    /// Returns the unique spinner name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the text displayed beside the glyph.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SpinnerState {
        self.state
    }

    /// Returns the line computed for this spinner on the last tick.\
    /// It is empty before the first tick.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub(crate) fn complete(&mut self, state: SpinnerState) {
        self.state = state;
    }

    pub(crate) fn set_rendered(&mut self, line: String) {
        self.rendered = line;
    }
}
