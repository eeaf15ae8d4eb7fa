use std::collections::BTreeSet;

/// Names marked as "sent" during the current session.
///
/// Keyed by name, not by record id: renaming an invitee to a name that was
/// already marked makes it show up as sent as well.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SentTracker {
    names: BTreeSet<String>,
}

impl SentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_sent(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn is_sent(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Drops every marker whose name is no longer in `current_names`.
    pub fn reconcile<S: AsRef<str>>(&mut self, current_names: &[S]) {
        let present: BTreeSet<&str> = current_names.iter().map(AsRef::as_ref).collect();
        self.names.retain(|name| present.contains(name.as_str()));
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
