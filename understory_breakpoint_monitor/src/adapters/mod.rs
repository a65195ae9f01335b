// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bundled [`Host`](crate::host::Host) implementations.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "headless")]
pub mod headless;
