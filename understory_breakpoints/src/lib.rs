// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_breakpoints --heading-base-level=0

//! Understory Breakpoints: a table of responsive width thresholds.
//!
//! ## Overview
//!
//! A [`BreakpointTable`] maps pixel-width thresholds to callbacks (or any other payload `C`).
//! Given a viewport width, [`BreakpointTable::resolve`] selects the applicable threshold:
//! the greatest registered threshold that does not exceed the width.
//!
//! The threshold `0` is the default entry. Registering the key `"default"` stores a callback at `0`,
//! and because `0` never exceeds a width it is the fallback whenever no larger threshold applies.
//!
//! ## Registration
//!
//! [`BreakpointTable::register`] accepts textual keys, which is how breakpoints usually arrive from
//! configuration or host bindings. Each entry is validated on its own:
//!
//! - Keys must be a non-negative integer or `"default"`.
//! - Values must be [`Handler::Callable`].
//!
//! Invalid entries are logged through `tracing` at info level and skipped; valid entries in the same
//! batch are still registered. Later registrations of the same normalized key replace earlier ones.
//! The returned [`Registration`] reports what happened.
//!
//! Typed callers can skip parsing with [`BreakpointTable::insert`] and a [`BreakpointKey`].
//!
//! ## Example
//!
//! ```rust
//! use understory_breakpoints::{BreakpointTable, Handler};
//!
//! let mut table = BreakpointTable::new();
//! let _ = table.register([
//!     ("default", Handler::callable("narrow")),
//!     ("600", Handler::callable("medium")),
//!     ("1200", Handler::callable("wide")),
//! ]);
//!
//! assert_eq!(table.resolve(320), Some(0));
//! assert_eq!(table.resolve(800), Some(600));
//! assert_eq!(table.lookup(1200), Some(&"wide"));
//! ```
//!
//! Change detection and callback dispatch live in `understory_breakpoint_monitor`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod registration;
pub mod table;
pub mod types;

pub use error::RegistrationError;
pub use registration::Registration;
pub use table::BreakpointTable;
pub use types::{BreakpointKey, DEFAULT_KEY, DEFAULT_THRESHOLD, Handler, Threshold};

/// Name used to prefix diagnostics and as the default notification namespace.
pub const PLUGIN: &str = "breakUp";
