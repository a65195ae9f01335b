// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-entry registration errors.

use alloc::string::String;

use thiserror::Error;

use crate::PLUGIN;

/// Why a single registration entry was skipped.
///
/// These never abort a [`register`](crate::BreakpointTable::register) call; they are
/// logged and collected in the returned [`Registration`](crate::Registration).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The key is neither a non-negative integer nor `"default"`.
    #[error(
        "[{}] the breakpoint key {key:?} is not valid; it must convert to a number or be the word \"default\"",
        PLUGIN
    )]
    InvalidKey {
        /// The key as supplied.
        key: String,
    },
    /// The value registered under a key cannot be invoked.
    #[error("[{}] {value}, for the breakpoint {key}, is not a function", PLUGIN)]
    NotCallable {
        /// The key as supplied.
        key: String,
        /// A rendering of the offending value.
        value: String,
    },
}

impl RegistrationError {
    /// The key of the rejected entry.
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidKey { key } | Self::NotCallable { key, .. } => key,
        }
    }
}
