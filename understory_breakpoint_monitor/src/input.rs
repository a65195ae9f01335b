// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction inputs: breakpoint maps, target descriptions, and configuration.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_breakpoints::Handler;

use crate::callback::{Callback, Invocation};
use crate::types::Namespace;

/// An ordered set of textual breakpoint entries awaiting registration.
///
/// Keys follow [`BreakpointKey::parse`](understory_breakpoints::BreakpointKey::parse);
/// invalid keys and non-callable values are skipped at registration.
pub struct BreakpointMap<E, A = ()> {
    entries: Vec<(String, Handler<Callback<E, A>>)>,
}

impl<E, A> Default for BreakpointMap<E, A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E, A> BreakpointMap<E, A> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closure under `key`.
    pub fn on(self, key: impl Into<String>, f: impl Fn(&Invocation<'_, E, A>) + 'static) -> Self {
        self.callback(key, Rc::new(f))
    }

    /// Add a shared callback under `key`.
    pub fn callback(self, key: impl Into<String>, cb: Callback<E, A>) -> Self {
        self.entry(key, Handler::Callable(cb))
    }

    /// Add a value that cannot be invoked; registration will reject it.
    pub fn value(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.entry(key, Handler::not_callable(value))
    }

    /// Add a raw entry.
    pub fn entry(mut self, key: impl Into<String>, handler: Handler<Callback<E, A>>) -> Self {
        self.entries.push((key.into(), handler));
        self
    }

    /// Number of entries, valid or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Handler<Callback<E, A>>)> {
        self.entries
    }
}

impl<E, A> fmt::Debug for BreakpointMap<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(k, h)| match h {
                Handler::Callable(_) => (k.as_str(), "<callback>"),
                Handler::NotCallable(v) => (k.as_str(), v.as_str()),
            }))
            .finish()
    }
}

/// A construction argument, tagged with what it is.
///
/// Both the breakpoint slot and the target slot of
/// [`BreakpointMonitor::new`](crate::monitor::BreakpointMonitor::new) take this type,
/// so a caller that passes a selector where breakpoints belong is rejected
/// instead of being misread.
#[derive(Debug)]
pub enum Input<E, A = ()> {
    /// Breakpoint entries.
    Breakpoints(BreakpointMap<E, A>),
    /// An already resolved element collection.
    Elements(Vec<E>),
    /// A selector for the host to resolve.
    Selector(String),
}

impl<E, A> Input<E, A> {
    /// Short description of the variant for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Breakpoints(_) => "a breakpoint map",
            Self::Elements(_) => "an element collection",
            Self::Selector(_) => "a selector",
        }
    }

    /// A selector input.
    pub fn selector(s: impl Into<String>) -> Self {
        Self::Selector(s.into())
    }
}

impl<E, A> From<BreakpointMap<E, A>> for Input<E, A> {
    fn from(map: BreakpointMap<E, A>) -> Self {
        Self::Breakpoints(map)
    }
}

impl<E, A> From<Vec<E>> for Input<E, A> {
    fn from(elements: Vec<E>) -> Self {
        Self::Elements(elements)
    }
}

/// Monitor configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorConfig<A = ()> {
    /// Namespace for the monitor's notification names. Defaults to the plugin name.
    pub namespace: Namespace,
    /// Extra arguments passed to every breakpoint callback.
    pub args: Vec<A>,
}

impl<A> Default for MonitorConfig<A> {
    fn default() -> Self {
        Self {
            namespace: Namespace::default(),
            args: Vec::new(),
        }
    }
}

impl<A> MonitorConfig<A> {
    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<Namespace>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the extra callback arguments.
    pub fn with_args(mut self, args: impl IntoIterator<Item = A>) -> Self {
        self.args = args.into_iter().collect();
        self
    }
}
