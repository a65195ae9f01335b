// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary returned by [`BreakpointTable::register`](crate::BreakpointTable::register).

use alloc::vec::Vec;

use crate::error::RegistrationError;
use crate::types::Threshold;

/// Outcome of a batch registration.
///
/// Registration is best effort, so callers that only care about the table
/// contents can drop this value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    /// Thresholds written by this call, in input order.
    pub accepted: Vec<Threshold>,
    /// Thresholds whose previous callback was overwritten by this call.
    pub replaced: Vec<Threshold>,
    /// Entries skipped, in input order.
    pub rejected: Vec<RegistrationError>,
}

impl Registration {
    /// True if every entry was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
