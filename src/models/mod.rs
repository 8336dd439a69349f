// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod entry;
pub mod entry_form;
pub mod summary;
pub mod validation;

pub use activity::{Activity, ActivityId};
pub use entry::{Entry, EntryId};
pub use entry_form::EntryForm;
pub use summary::EntrySummary;
pub use validation::ValidationErrors;
