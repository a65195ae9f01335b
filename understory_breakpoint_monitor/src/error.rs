// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use alloc::string::String;

use thiserror::Error;
use understory_breakpoints::PLUGIN;

/// Why a monitor was not constructed.
///
/// Nothing is bound when construction fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// The breakpoint slot held no breakpoint map.
    #[error("[{}] expected a breakpoint map but got {found}", PLUGIN)]
    MissingBreakpointSpec {
        /// What was supplied instead.
        found: &'static str,
    },
    /// The target selector or collection resolved to no elements.
    #[error("[{}] no elements matched {targets}", PLUGIN)]
    EmptyTargetSet {
        /// Description of the targets that were supplied.
        targets: String,
    },
}
