// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification names, targets, events, and viewport metrics.
//!
//! These types describe what a [`Host`](crate::host::Host) delivers to the monitor
//! and what the monitor emits back.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_breakpoints::{PLUGIN, Threshold};

/// Scope for notification names so independent monitors on the same elements
/// do not react to each other's notifications.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace.
    pub fn new(ns: impl Into<String>) -> Self {
        Self(ns.into())
    }

    /// The namespace text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(String::from(PLUGIN))
    }
}

impl From<&str> for Namespace {
    fn from(ns: &str) -> Self {
        Self::new(ns)
    }
}

impl From<String> for Namespace {
    fn from(ns: String) -> Self {
        Self(ns)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kinds of notification the monitor binds or emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The viewport changed size.
    Resize,
    /// The document finished loading.
    Load,
    /// The active breakpoint changed; emitted by the monitor on its elements.
    BreakChanged,
}

impl EventKind {
    /// The conventional event type string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Load => "load",
            Self::BreakChanged => "breakChanged",
        }
    }
}

/// An event type with an optional namespace, rendered as `kind.namespace`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventName {
    /// Event type.
    pub kind: EventKind,
    /// Optional scope.
    pub namespace: Option<Namespace>,
}

impl EventName {
    /// An un-namespaced name; as a trigger it reaches every listener of `kind`.
    pub const fn plain(kind: EventKind) -> Self {
        Self {
            kind,
            namespace: None,
        }
    }

    /// A name scoped to `namespace`.
    pub fn namespaced(kind: EventKind, namespace: Namespace) -> Self {
        Self {
            kind,
            namespace: Some(namespace),
        }
    }

    /// Whether a notification named `self` reaches a listener bound as `listener`.
    ///
    /// Kinds must match. A namespaced notification only reaches listeners bound
    /// in the same namespace; an un-namespaced one reaches all of them.
    pub fn matches(&self, listener: &Self) -> bool {
        self.kind == listener.kind
            && match &self.namespace {
                None => true,
                Some(ns) => listener.namespace.as_ref() == Some(ns),
            }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{ns}", self.kind.as_str()),
            None => f.write_str(self.kind.as_str()),
        }
    }
}

/// Where a listener is bound or a notification is delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<E> {
    /// The global window.
    Window,
    /// A collection of elements.
    Elements(Vec<E>),
}

impl<E: PartialEq> Target<E> {
    /// True if both targets are the window, or both name at least one common element.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Window, Self::Window) => true,
            (Self::Elements(a), Self::Elements(b)) => a.iter().any(|e| b.contains(e)),
            _ => false,
        }
    }
}

/// A notification as seen by listeners and callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event<E> {
    /// The notification name.
    pub name: EventName,
    /// Elements the notification was delivered with as context (empty for window events).
    pub context: Vec<E>,
}

impl<E> Event<E> {
    /// Create an event.
    pub fn new(name: EventName, context: Vec<E>) -> Self {
        Self { name, context }
    }

    /// A window-level event with no element context.
    pub fn window(kind: EventKind) -> Self {
        Self::new(EventName::plain(kind), Vec::new())
    }
}

/// Width readings a host can report for its viewport.
///
/// Hosts fill in whatever they can measure; `None` and `0` both mean
/// "not available".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewportMetrics {
    /// Width of the window's layout viewport.
    pub inner_width: Option<Threshold>,
    /// Layout width of the root element.
    pub offset_width: Option<Threshold>,
    /// Inner width of the root element.
    pub client_width: Option<Threshold>,
}

impl ViewportMetrics {
    /// Metrics with only an inner width.
    pub const fn from_inner_width(width: Threshold) -> Self {
        Self {
            inner_width: Some(width),
            offset_width: None,
            client_width: None,
        }
    }

    /// The effective width: the first non-zero of inner, offset, and client width.
    ///
    /// Returns `0` when none is available.
    pub fn width(&self) -> Threshold {
        [self.inner_width, self.offset_width, self.client_width]
            .into_iter()
            .flatten()
            .find(|&w| w != 0)
            .unwrap_or(0)
    }
}

/// A change of active breakpoint detected by a width check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Breakpoint active before the check (`None` before the first check).
    pub from: Option<Threshold>,
    /// Breakpoint resolved by the check.
    pub to: Option<Threshold>,
}

/// Result of handling one `breakChanged` notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The callback for the threshold was invoked.
    Invoked(Threshold),
    /// The current transition was already dispatched.
    Suppressed,
    /// No callback is registered for the current breakpoint.
    NoHandler(Option<Threshold>),
}
