use crate::set::SpinError;
use crate::spinner::{Spinner, SpinnerState};

#[cfg(test)]
#[path = "./registry.tests.rs"]
mod registry_tests;

/// Ordered list of name and label pairs used to build a [`Registry`].
#[derive(Debug, Default, Clone)]
pub struct Spinners {
    items: Vec<(String, String)>,
}

impl Spinners {
    /// Creates spinners from an ordered sequence of labels, each label is used as its own name.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels
                .into_iter()
                .map(|label| {
                    let label = label.into();
                    (label.clone(), label)
                })
                .collect(),
        }
    }

    /// Creates spinners from explicit name and label pairs.
    pub fn from_pairs<I, N, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        Self {
            items: pairs.into_iter().map(|(name, label)| (name.into(), label.into())).collect(),
        }
    }

    /// Appends a named spinner.
    pub fn push(&mut self, name: impl Into<String>, label: impl Into<String>) {
        self.items.push((name.into(), label.into()));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Holds all spinners in their insertion order together with the shared animation frame cursor.\
/// The set of spinners is fixed once the registry is created.
pub struct Registry {
    entries: Vec<Spinner>,
    frame_index: usize,
}

impl Registry {
    /// Creates new [`Registry`] checking that spinners are not empty and their names are unique.
    pub fn new(spinners: Spinners) -> Result<Self, SpinError> {
        if spinners.is_empty() {
            return Err(SpinError::NoSpinners);
        }

        let mut entries: Vec<Spinner> = Vec::with_capacity(spinners.len());
        for (name, label) in spinners.items {
            if entries.iter().any(|entry| entry.name() == name) {
                return Err(SpinError::DuplicateSpinner(name));
            }

            entries.push(Spinner::new(name, label));
        }

        Ok(Self { entries, frame_index: 0 })
    }

    /// Advances the shared frame cursor, wrapping at the frames count.
    pub fn advance_frame(&mut self, frames_count: usize) {
        self.frame_index = (self.frame_index + 1) % frames_count;
    }

    /// Returns the current position in the animation frame sequence.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Moves the named spinner to the given terminal state.
    pub fn complete(&mut self, name: &str, state: SpinnerState) -> Result<(), SpinError> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.name() == name) else {
            return Err(SpinError::UnknownSpinner(name.to_owned()));
        };

        if !state.is_terminal() {
            return Err(SpinError::InvalidState);
        }

        entry.complete(state);

        Ok(())
    }

    /// Returns `true` if every spinner reached a terminal state.
    pub fn all_completed(&self) -> bool {
        self.entries.iter().all(|entry| entry.state().is_terminal())
    }

    /// Returns the named spinner.
    pub fn get(&self, name: &str) -> Option<&Spinner> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Iterates spinners in their insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Spinner> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Spinner> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
