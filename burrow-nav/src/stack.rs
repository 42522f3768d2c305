use burrow_types::ProfileId;
use std::fmt;

use crate::logging::PROFILE_STACK_TARGET;

/// Default number of profile overlays that may be nested on a post detail view
pub const MAX_DEPTH: usize = 5;

/// Separator used by the joined string form of a stack
pub const JOIN_SEPARATOR: char = ',';

/// Ordered stack of open profile overlays.
///
/// Every `push` keeps two invariants: the stack never grows past
/// `max_depth`, and a profile never appears twice (opening an ancestor again
/// would be a navigation cycle). Rejected operations are ordinary return
/// values; nothing here panics or returns an error.
///
/// `restore` copies a previous stack verbatim and is the one path that does
/// not re-check the invariants. Callers restoring a stack that may come from
/// a larger limit follow it with [`NavigationStack::truncate_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<ProfileId>,
    max_depth: usize,
}

impl NavigationStack {
    /// Create an empty stack limited to [`MAX_DEPTH`] entries
    pub fn new() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }

    /// Create an empty stack with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// True if `id` could be pushed right now
    pub fn can_open(&self, id: impl AsRef<str>) -> bool {
        self.entries.len() < self.max_depth && !self.is_in_stack(id)
    }

    /// Open a new overlay for `id`.
    ///
    /// Returns `false` and leaves the stack untouched when the stack is full
    /// or `id` is already open.
    pub fn push(&mut self, id: impl Into<ProfileId>) -> bool {
        let id = id.into();

        if self.can_open(&id) {
            log::debug!(
                target: PROFILE_STACK_TARGET,
                "Pushed profile {} (depth: {})",
                id,
                self.entries.len() + 1
            );
            self.entries.push(id);
            return true;
        }

        log::warn!(
            target: PROFILE_STACK_TARGET,
            "Rejected profile {} (depth: {}/{}, duplicate: {})",
            id,
            self.entries.len(),
            self.max_depth,
            self.is_in_stack(&id)
        );
        false
    }

    /// Close the top overlay, returning its profile id
    pub fn pop(&mut self) -> Option<ProfileId> {
        match self.entries.pop() {
            Some(removed) => {
                log::debug!(
                    target: PROFILE_STACK_TARGET,
                    "Popped profile {} (depth: {})",
                    removed,
                    self.entries.len()
                );
                Some(removed)
            }
            None => {
                log::warn!(target: PROFILE_STACK_TARGET, "Nothing to pop, stack is empty");
                None
            }
        }
    }

    pub fn current_depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_in_stack(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        self.entries.iter().any(|entry| entry.as_str() == id)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently opened profile
    pub fn top_of_stack(&self) -> Option<&ProfileId> {
        self.entries.last()
    }

    /// Read-only view of the open profiles, bottom first
    pub fn entries(&self) -> &[ProfileId] {
        &self.entries
    }

    /// Close every overlay above the first occurrence of `id`, keeping `id`
    /// itself on top.
    ///
    /// Returns the number of overlays closed. An `id` that is not open
    /// leaves the stack unchanged and returns 0.
    pub fn pop_to(&mut self, id: impl AsRef<str>) -> usize {
        let id = id.as_ref();

        let Some(index) = self.entries.iter().position(|entry| entry.as_str() == id) else {
            log::warn!(target: PROFILE_STACK_TARGET, "Profile {} is not in the stack", id);
            return 0;
        };

        let removed = self.entries.split_off(index + 1);
        for entry in &removed {
            log::debug!(target: PROFILE_STACK_TARGET, "Removed profile {}", entry);
        }
        log::debug!(
            target: PROFILE_STACK_TARGET,
            "Collapsed stack to {} (depth: {})",
            id,
            self.entries.len()
        );
        removed.len()
    }

    /// Drop top entries until at most `max_depth` remain.
    ///
    /// Returns the number of entries removed.
    pub fn truncate_to(&mut self, max_depth: usize) -> usize {
        if self.entries.len() <= max_depth {
            return 0;
        }

        let removed = self.entries.split_off(max_depth);
        for entry in &removed {
            log::debug!(
                target: PROFILE_STACK_TARGET,
                "Removed profile {} over depth limit {}",
                entry,
                max_depth
            );
        }
        removed.len()
    }

    /// Snapshot of the stack for handing over to another view
    pub fn serialize(&self) -> Vec<ProfileId> {
        self.entries.clone()
    }

    /// Replace the stack with a previously serialized one
    pub fn restore<I, T>(&mut self, saved: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ProfileId>,
    {
        self.entries.clear();
        self.entries.extend(saved.into_iter().map(Into::into));
        log::debug!(
            target: PROFILE_STACK_TARGET,
            "Restored stack with {} profile(s)",
            self.entries.len()
        );
        self.log_state();
    }

    /// Comma-joined form for channels that only carry plain strings
    pub fn to_joined(&self) -> String {
        join_ids(&self.entries)
    }

    /// Restore from [`NavigationStack::to_joined`] output.
    ///
    /// Blank segments are skipped. A blank input leaves the stack as it is.
    pub fn restore_joined(&mut self, joined: &str) {
        if joined.trim().is_empty() {
            return;
        }
        self.restore(split_ids(joined));
    }

    pub fn clear(&mut self) {
        let old_depth = self.entries.len();
        self.entries.clear();
        log::debug!(
            target: PROFILE_STACK_TARGET,
            "Cleared stack ({} -> 0)",
            old_depth
        );
    }

    /// Human readable summary, e.g. `(2/5): u1 -> u2`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Write the current summary to the debug log
    pub fn log_state(&self) {
        log::debug!(target: PROFILE_STACK_TARGET, "Stack {}", self);
    }
}

/// Join ids with [`JOIN_SEPARATOR`]
pub fn join_ids(ids: &[ProfileId]) -> String {
    ids.iter()
        .map(ProfileId::as_str)
        .collect::<Vec<_>>()
        .join(&JOIN_SEPARATOR.to_string())
}

/// Inverse of [`join_ids`], dropping blank segments
pub fn split_ids(joined: &str) -> Vec<ProfileId> {
    joined
        .split(JOIN_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(ProfileId::from)
        .collect()
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NavigationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("empty");
        }

        write!(f, "({}/{}): ", self.entries.len(), self.max_depth)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(entry.as_str())?;
        }
        Ok(())
    }
}
