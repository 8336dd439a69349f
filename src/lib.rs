// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness Frog: log daily activity and track average daily activity.
//!
//! This crate provides a small server-rendered web application for adding,
//! editing and deleting activity entries.

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod views;

use db::EntryRepository;
use services::ActivityCatalog;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub entries: Arc<dyn EntryRepository>,
    pub activities: ActivityCatalog,
}
