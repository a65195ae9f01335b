// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_breakpoint_monitor --heading-base-level=0

//! Understory Breakpoint Monitor: responsive breakpoint change detection and dispatch.
//!
//! ## Overview
//!
//! Given a set of width thresholds with callbacks, a monitor watches the viewport and invokes the
//! callback for the active threshold each time the active threshold changes.
//! Resizing within one breakpoint invokes nothing; crossing into another invokes its callback once.
//!
//! The crate does not lay anything out or change presentation. It only signals which breakpoint is active.
//!
//! ## Pieces
//!
//! - [`BreakpointMonitor`](crate::monitor::BreakpointMonitor): the state machine. It owns a
//!   [`BreakpointTable`](understory_breakpoints::BreakpointTable) of bound callbacks and a
//!   [`MonitorState`](crate::monitor::MonitorState) (`current` breakpoint and a `dirty` flag).
//! - [`Host`](crate::host::Host): the environment. It resolves selectors, reports
//!   [`ViewportMetrics`](crate::types::ViewportMetrics), and binds, unbinds, and triggers notifications.
//! - [`install`](crate::install::install): constructs a monitor and binds it to a host.
//! - [`adapters::headless`]: an in-memory host (feature `headless`).
//!
//! ## Flow
//!
//! 1) The host fires `resize` or `load` on the window.
//! 2) The monitor reads the viewport width (inner width, falling back to the root element's offset
//!    and then client width) and resolves it against its table.
//! 3) If the resolved breakpoint differs from the recorded one, the monitor records it, re-arms
//!    dispatch, and triggers `breakChanged.<namespace>` on its elements.
//! 4) The `breakChanged` listener invokes the callback for the recorded breakpoint and marks the
//!    transition dispatched. Further `breakChanged` notifications are ignored until the next transition.
//!
//! Notification names are scoped by a [`Namespace`](crate::types::Namespace) (default `"breakUp"`), so
//! independent monitors on the same elements do not trigger each other.
//!
//! ## Inputs
//!
//! Construction takes tagged [`Input`](crate::input::Input) values: a breakpoint map for the
//! breakpoint slot and a selector or element collection for the target slot. Misplaced or empty inputs
//! are logged and reported as [`MonitorError`](crate::error::MonitorError); nothing is bound.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_breakpoint_monitor::adapters::headless::HeadlessHost;
//! use understory_breakpoint_monitor::{BreakpointMap, Input, MonitorConfig, install};
//!
//! let host = Rc::new(HeadlessHost::new());
//! host.add_element("#app");
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let (narrow, wide) = (log.clone(), log.clone());
//! let _monitor = install(
//!     &host,
//!     Some(Input::from(
//!         BreakpointMap::new()
//!             .on("default", move |_| narrow.borrow_mut().push("narrow"))
//!             .on("100", move |_| wide.borrow_mut().push("wide")),
//!     )),
//!     MonitorConfig::<()>::default(),
//!     Input::selector("#app"),
//! )
//! .unwrap();
//!
//! for width in [50, 50, 150, 150, 50] {
//!     host.resize(width);
//! }
//! assert_eq!(*log.borrow(), ["narrow", "wide", "narrow"]);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`. Without a subscriber they are discarded.
//!
//! This crate is `no_std` and uses `alloc`. Everything is single-threaded; monitors are not `Send`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod callback;
pub mod error;
pub mod host;
pub mod input;
pub mod install;
pub mod monitor;
pub mod types;

pub use callback::{BoundCallback, Callback, Invocation, callback};
pub use error::MonitorError;
pub use host::{Host, Listener};
pub use input::{BreakpointMap, Input, MonitorConfig};
pub use install::{Installed, install};
pub use monitor::{BreakpointMonitor, MonitorState};
pub use types::{
    Dispatch, Event, EventKind, EventName, Namespace, Target, Transition, ViewportMetrics,
};
pub use understory_breakpoints::{DEFAULT_THRESHOLD, Threshold};
