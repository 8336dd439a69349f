// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity type reference data.

use serde::{Deserialize, Serialize};

/// Activity type identifier.
pub type ActivityId = u32;

/// An activity type offered in the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    /// Display name (e.g., "Running")
    pub name: String,
}

impl Activity {
    pub fn new(id: ActivityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
