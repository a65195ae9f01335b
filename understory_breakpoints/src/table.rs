// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The breakpoint table: registration, resolution, and lookup.

use alloc::collections::BTreeMap;
use alloc::string::ToString;

use tracing::{debug, info};

use crate::error::RegistrationError;
use crate::registration::Registration;
use crate::types::{BreakpointKey, Handler, Threshold};

/// Ordered map from width thresholds to callbacks.
///
/// Keys are unique. Registering the same normalized key twice keeps the later
/// callback; `"default"` and `0` name the same entry.
#[derive(Clone, PartialEq, Eq)]
pub struct BreakpointTable<C> {
    entries: BTreeMap<Threshold, C>,
}

impl<C> Default for BreakpointTable<C> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<C> core::fmt::Debug for BreakpointTable<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BreakpointTable")
            .field("thresholds", &self.entries.keys())
            .finish_non_exhaustive()
    }
}

impl<C> BreakpointTable<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of textual entries.
    ///
    /// Each entry is validated on its own. Invalid keys and
    /// [`Handler::NotCallable`] values are logged at info level and skipped;
    /// the remaining entries are still registered. Nothing here fails.
    ///
    /// ```
    /// use understory_breakpoints::{BreakpointTable, Handler};
    ///
    /// let mut table = BreakpointTable::new();
    /// let report = table.register([
    ///     ("default", Handler::callable("phone")),
    ///     ("768", Handler::callable("tablet")),
    ///     ("wide", Handler::callable("ignored")),
    /// ]);
    /// assert_eq!(report.accepted, vec![0, 768]);
    /// assert_eq!(report.rejected.len(), 1);
    /// assert_eq!(table.resolve(1000), Some(768));
    /// ```
    pub fn register<I, K>(&mut self, entries: I) -> Registration
    where
        I: IntoIterator<Item = (K, Handler<C>)>,
        K: AsRef<str>,
    {
        let mut report = Registration::default();
        for (raw, handler) in entries {
            let raw = raw.as_ref();
            let key = match BreakpointKey::parse(raw) {
                Ok(key) => key,
                Err(err) => {
                    info!(key = raw, "{err}");
                    report.rejected.push(err);
                    continue;
                }
            };
            match handler {
                Handler::Callable(callback) => {
                    let threshold = key.threshold();
                    if self.insert(key, callback).is_some() {
                        report.replaced.push(threshold);
                    }
                    report.accepted.push(threshold);
                }
                Handler::NotCallable(value) => {
                    let err = RegistrationError::NotCallable {
                        key: raw.to_string(),
                        value,
                    };
                    info!(key = raw, "{err}");
                    report.rejected.push(err);
                }
            }
        }
        report
    }

    /// Insert one callback under a typed key, returning the callback it replaced.
    pub fn insert(&mut self, key: BreakpointKey, callback: C) -> Option<C> {
        let threshold = key.threshold();
        let previous = self.entries.insert(threshold, callback);
        debug!(
            threshold,
            replaced = previous.is_some(),
            "registered breakpoint"
        );
        previous
    }

    /// Remove the callback stored at `threshold`.
    pub fn remove(&mut self, threshold: Threshold) -> Option<C> {
        self.entries.remove(&threshold)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resolve the active threshold for `width`.
    ///
    /// Picks the greatest registered threshold that is `<= width`. The default
    /// threshold `0` always qualifies, so it is the fallback whenever nothing
    /// larger does. Returns `None` only when no threshold qualifies and no
    /// default is registered.
    pub fn resolve(&self, width: Threshold) -> Option<Threshold> {
        self.entries.range(..=width).next_back().map(|(&t, _)| t)
    }

    /// The callback stored at `threshold`.
    pub fn lookup(&self, threshold: Threshold) -> Option<&C> {
        self.entries.get(&threshold)
    }

    /// Resolve `width` and return the threshold together with its callback.
    pub fn resolve_entry(&self, width: Threshold) -> Option<(Threshold, &C)> {
        self.entries.range(..=width).next_back().map(|(&t, c)| (t, c))
    }

    /// Read-only view of all entries, ordered by threshold.
    pub fn list(&self) -> &BTreeMap<Threshold, C> {
        &self.entries
    }

    /// Iterate entries in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (Threshold, &C)> + '_ {
        self.entries.iter().map(|(&t, c)| (t, c))
    }

    /// Registered thresholds in ascending order.
    pub fn thresholds(&self) -> impl Iterator<Item = Threshold> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered thresholds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C, K: AsRef<str>> Extend<(K, Handler<C>)> for BreakpointTable<C> {
    fn extend<I: IntoIterator<Item = (K, Handler<C>)>>(&mut self, iter: I) {
        let _ = self.register(iter);
    }
}
