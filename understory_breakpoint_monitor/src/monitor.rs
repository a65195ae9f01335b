// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint change detection and dispatch.
//!
//! ## Overview
//!
//! [`BreakpointMonitor`] owns a [`BreakpointTable`] of bound callbacks and a
//! [`MonitorState`]. Each width check resolves the active breakpoint; when it
//! differs from the recorded one the monitor reports a [`Transition`] and arms
//! dispatch. The next `breakChanged` notification invokes the callback for the
//! new breakpoint once; further notifications are suppressed until another
//! transition re-arms it.
//!
//! The monitor itself never touches a host. [`install`](crate::install::install)
//! wires it to one; tests and custom event loops can drive it directly.
//!
//! ## Example
//!
//! ```
//! use understory_breakpoint_monitor::{BreakpointMap, BreakpointMonitor, Dispatch, Event,
//!     EventKind, Input, MonitorConfig};
//!
//! let map = BreakpointMap::new()
//!     .on("default", |_| println!("narrow"))
//!     .on("600", |_| println!("wide"));
//! let mut m: BreakpointMonitor<u32> = BreakpointMonitor::new(
//!     Some(Input::from(map)),
//!     MonitorConfig::default(),
//!     Input::from(vec![1]),
//!     |_| Vec::new(),
//! )
//! .unwrap();
//!
//! let changed = Event::window(EventKind::BreakChanged);
//! assert!(m.check_width(320).is_some());
//! assert_eq!(m.on_breakpoint_changed(&changed), Dispatch::Invoked(0));
//! assert!(m.check_width(400).is_none());
//! assert!(m.check_width(700).is_some());
//! assert_eq!(m.on_breakpoint_changed(&changed), Dispatch::Invoked(600));
//! assert_eq!(m.on_breakpoint_changed(&changed), Dispatch::Suppressed);
//! ```

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, info, warn};
use understory_breakpoints::{BreakpointTable, Handler, Registration, Threshold};

use crate::callback::BoundCallback;
use crate::error::MonitorError;
use crate::input::{BreakpointMap, Input, MonitorConfig};
use crate::types::{Dispatch, Event, Namespace, Transition, ViewportMetrics};

/// Change-detection state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorState {
    /// The breakpoint recorded by the last width check; `None` until the first.
    pub current: Option<Threshold>,
    /// True once the current transition has been dispatched.
    pub dirty: bool,
}

/// One monitor per (elements, breakpoint set) pair.
pub struct BreakpointMonitor<E, A = ()> {
    table: BreakpointTable<BoundCallback<E, A>>,
    state: MonitorState,
    namespace: Namespace,
    elements: Rc<[E]>,
    args: Rc<[A]>,
}

impl<E: core::fmt::Debug, A> core::fmt::Debug for BreakpointMonitor<E, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BreakpointMonitor")
            .field("thresholds", &self.table.list().keys())
            .field("state", &self.state)
            .field("namespace", &self.namespace)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<E, A> BreakpointMonitor<E, A> {
    /// Construct a monitor.
    ///
    /// `breakpoints` must be [`Input::Breakpoints`]. `targets` must be a selector, which
    /// is resolved with `select`, or an element collection; either must yield at
    /// least one element. Failures are logged and returned, and nothing is
    /// registered.
    pub fn new(
        breakpoints: Option<Input<E, A>>,
        config: MonitorConfig<A>,
        targets: Input<E, A>,
        select: impl FnOnce(&str) -> Vec<E>,
    ) -> Result<Self, MonitorError> {
        let map = match breakpoints {
            Some(Input::Breakpoints(map)) => map,
            other => {
                let err = MonitorError::MissingBreakpointSpec {
                    found: other.as_ref().map_or("nothing", Input::kind),
                };
                warn!("{err}");
                return Err(err);
            }
        };

        let (elements, described) = match targets {
            Input::Selector(selector) => {
                let found = select(&selector);
                (found, format!("selector {selector:?}"))
            }
            Input::Elements(elements) => (elements, String::from("an empty element collection")),
            Input::Breakpoints(_) => (Vec::new(), String::from("a breakpoint map")),
        };
        if elements.is_empty() {
            let err = MonitorError::EmptyTargetSet { targets: described };
            warn!("{err}");
            return Err(err);
        }

        let mut monitor = Self {
            table: BreakpointTable::new(),
            state: MonitorState::default(),
            namespace: config.namespace,
            elements: Rc::from(elements),
            args: Rc::from(config.args),
        };
        let _ = monitor.register(map);
        Ok(monitor)
    }

    /// Register more breakpoints, bound to this monitor's elements and arguments.
    ///
    /// Later registrations of a threshold replace earlier ones. Invalid entries
    /// are logged and skipped.
    pub fn register(&mut self, map: BreakpointMap<E, A>) -> Registration {
        let context = &self.elements;
        let args = &self.args;
        let entries = map.into_entries().into_iter().map(|(key, handler)| {
            let handler = match handler {
                Handler::Callable(cb) => {
                    Handler::Callable(BoundCallback::new(cb, context.clone(), args.clone()))
                }
                Handler::NotCallable(v) => Handler::NotCallable(v),
            };
            (key, handler)
        });
        self.table.register(entries)
    }

    /// Check a viewport measurement. See [`check_width`](Self::check_width).
    pub fn check_viewport(&mut self, metrics: ViewportMetrics) -> Option<Transition> {
        self.check_width(metrics.width())
    }

    /// Resolve `width` and record a transition if the active breakpoint changed.
    ///
    /// A transition (including the first check) re-arms dispatch. Returns
    /// `None` when the breakpoint is unchanged.
    pub fn check_width(&mut self, width: Threshold) -> Option<Transition> {
        let resolved = self.table.resolve(width);
        if resolved == self.state.current {
            return None;
        }
        let transition = Transition {
            from: self.state.current,
            to: resolved,
        };
        debug!(
            namespace = %self.namespace,
            width,
            from = ?transition.from,
            to = ?transition.to,
            "breakpoint changed"
        );
        self.state.current = resolved;
        self.state.dirty = false;
        Some(transition)
    }

    /// Handle a `breakChanged` notification.
    ///
    /// Invokes the current breakpoint's callback with `event` unless this
    /// transition was already dispatched.
    pub fn on_breakpoint_changed(&mut self, event: &Event<E>) -> Dispatch {
        match self.claim_dispatch() {
            Ok((threshold, callback)) => {
                callback.invoke(threshold, event);
                Dispatch::Invoked(threshold)
            }
            Err(outcome) => outcome,
        }
    }

    /// Take the callback due for dispatch and mark the transition dispatched.
    ///
    /// Marking happens before the callback runs so that a notification
    /// triggered from inside the callback is suppressed.
    pub(crate) fn claim_dispatch(&mut self) -> Result<(Threshold, BoundCallback<E, A>), Dispatch> {
        if self.state.dirty {
            return Err(Dispatch::Suppressed);
        }
        let current = self.state.current;
        match current.and_then(|t| self.table.lookup(t).map(|cb| (t, cb.clone()))) {
            Some(found) => {
                self.state.dirty = true;
                Ok(found)
            }
            None => {
                info!(
                    namespace = %self.namespace,
                    breakpoint = ?current,
                    "the handler for the current breakpoint is not a function"
                );
                Err(Dispatch::NoHandler(current))
            }
        }
    }

    /// Registered breakpoints and their bound callbacks.
    pub fn list_breakpoints(&self) -> &BTreeMap<Threshold, BoundCallback<E, A>> {
        self.table.list()
    }

    /// The underlying table.
    pub fn table(&self) -> &BreakpointTable<BoundCallback<E, A>> {
        &self.table
    }

    /// Current change-detection state.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// The breakpoint recorded by the last check.
    pub fn current(&self) -> Option<Threshold> {
        self.state.current
    }

    /// The notification namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Change the notification namespace.
    ///
    /// Listeners already bound by [`install`](crate::install::install) keep the
    /// names they were bound with; reinstall to pick up the new namespace.
    pub fn set_namespace(&mut self, namespace: impl Into<Namespace>) {
        self.namespace = namespace.into();
    }

    /// The elements this monitor is bound to.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }
}
