use std::slice::Iter;

use super::errors::Error;

/// Ordered record of the errors met during one parse.
///
/// Entries are only ever appended; nothing is removed, reordered or merged.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn push(&mut self, error: Error) {
        tracing::debug!(error = %error, "recorded diagnostic");
        self.entries.push(error);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Error> {
        self.entries.iter()
    }

    /// Rendered messages, in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|error| error.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
