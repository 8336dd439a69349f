// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - reference data used by the handlers.

pub mod activity;

pub use activity::{ActivityCatalog, ActivityCatalogError};
