//! Undo history: a LIFO stack that owns buffer snapshots.
//!
//! Pushing moves a buffer into the stack, so the caller cannot read, write
//! or free it afterwards. Each stored buffer is dropped exactly once: when
//! it is popped, when the stack is cleared, or when the stack itself is
//! dropped. [`History::take`] is the only way to get ownership back.

use std::collections::TryReserveError;

use tracing::{error, trace};

use crate::buffer::Image;
use crate::error::{HistoryError, HistoryResult};

/// LIFO stack of owned snapshots. The top is the most recent push.
#[derive(Debug)]
pub struct History<B = Image> {
    entries: Vec<B>,
}

impl<B> Default for History<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> History<B> {
    /// Empty history.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Empty history with room for `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Move `image` onto the top of the stack.
    ///
    /// If storage for the new entry cannot be reserved, the failure is
    /// logged, `image` is dropped and the stack is left as it was.
    pub fn push(&mut self, image: B) -> HistoryResult<()> {
        self.push_reserved(image, |entries| entries.try_reserve(1))
    }

    /// Push after `reserve` has made room for one more entry.
    fn push_reserved<R>(&mut self, image: B, reserve: R) -> HistoryResult<()>
    where
        R: FnOnce(&mut Vec<B>) -> Result<(), TryReserveError>,
    {
        if let Err(e) = reserve(&mut self.entries) {
            error!(len = self.entries.len(), error = %e, "failed to allocate history entry");
            return Err(HistoryError::Allocation);
        }
        self.entries.push(image);
        trace!(len = self.entries.len(), "history push");
        Ok(())
    }

    /// Drop the top snapshot. Returns `false` if the stack was empty.
    pub fn pop(&mut self) -> bool {
        match self.entries.pop() {
            Some(image) => {
                drop(image);
                trace!(len = self.entries.len(), "history pop");
                true
            }
            None => false,
        }
    }

    /// Remove the top snapshot and hand ownership back to the caller.
    pub fn take(&mut self) -> Option<B> {
        let image = self.entries.pop();
        if image.is_some() {
            trace!(len = self.entries.len(), "history take");
        }
        image
    }

    /// Borrow the top snapshot without removing it.
    pub fn top(&self) -> Option<&B> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut B> {
        self.entries.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop every snapshot, most recent first.
    pub fn clear(&mut self) {
        while self.pop() {}
    }

    /// Iterate snapshots from top (most recent) to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &B> + '_ {
        self.entries.iter().rev()
    }
}

impl<B> Drop for History<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
