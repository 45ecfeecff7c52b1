// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The browser binding is the only runtime: it wraps [`crate::SiteSearch`],
//! fetches the index, and hands effects back to the page script.

pub mod wasm;
