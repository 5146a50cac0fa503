//! Suggestion bookkeeping for the autocomplete widget.
//!
//! Every keystroke issues a new query tagged with a sequence number. Only
//! the response to the latest query is applied, so a slow reply to an older
//! query never overwrites fresher suggestions.

#[cfg(test)]
#[path = "autocomplete_test.rs"]
mod autocomplete_test;

#[derive(Clone, Debug)]
pub struct SuggestionState<T> {
    pub items: Vec<T>,
    pub open: bool,
    latest: u64,
}

impl<T> Default for SuggestionState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), open: false, latest: 0 }
    }
}

/// A query that must be sent to the suggestion source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuery {
    pub seq: u64,
    pub text: String,
}

impl<T> SuggestionState<T> {
    /// Register new input text.
    ///
    /// Empty input clears the suggestions and returns `None`: no request is
    /// needed. Any earlier in-flight query becomes stale either way.
    pub fn begin(&mut self, input: &str) -> Option<PendingQuery> {
        self.latest += 1;
        if input.is_empty() {
            self.items.clear();
            self.open = false;
            return None;
        }
        self.open = true;
        Some(PendingQuery { seq: self.latest, text: input.to_owned() })
    }

    /// Apply suggestions for query `seq`. Returns `false` for stale replies.
    pub fn accept(&mut self, seq: u64, items: Vec<T>) -> bool {
        if seq != self.latest {
            return false;
        }
        self.items = items;
        true
    }

    /// Close the list, e.g. after a pick. Pending replies become stale.
    pub fn close(&mut self) {
        self.latest += 1;
        self.open = false;
        self.items.clear();
    }
}

/// Whether typing `input` should drop the current selection.
///
/// Empty input always clears. Otherwise the selection survives only while the
/// text still reads as its label.
#[must_use]
pub fn clears_selection(input: &str, selected_label: Option<&str>) -> bool {
    input.is_empty() || selected_label.is_some_and(|label| label != input)
}

/// Text the input should show after the selection's label changes from
/// `previous` to `label`, or `None` to leave `current` alone.
///
/// A selection dropped because the user typed over it keeps the typed text.
#[must_use]
pub fn synced_text(current: &str, previous: Option<&str>, label: &str) -> Option<String> {
    let typed_over = label.is_empty() && previous.is_some_and(|p| p != current);
    (!typed_over && current != label).then(|| label.to_owned())
}
