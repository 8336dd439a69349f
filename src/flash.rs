// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot success messages carried across a redirect.
//!
//! The message is stored as a short code in a cookie, shown by the next page
//! that consumes it, and cleared in the same response.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie holding the pending message code.
pub const FLASH_COOKIE: &str = "fitness_frog_flash";

/// Success notices shown after a redirect to the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    EntryAdded,
    EntryUpdated,
    EntryDeleted,
}

impl FlashMessage {
    pub fn code(self) -> &'static str {
        match self {
            FlashMessage::EntryAdded => "added",
            FlashMessage::EntryUpdated => "updated",
            FlashMessage::EntryDeleted => "deleted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "added" => Some(FlashMessage::EntryAdded),
            "updated" => Some(FlashMessage::EntryUpdated),
            "deleted" => Some(FlashMessage::EntryDeleted),
            _ => None,
        }
    }

    /// Text shown in the page banner.
    pub fn text(self) -> &'static str {
        match self {
            FlashMessage::EntryAdded => "Your entry was successfully added!",
            FlashMessage::EntryUpdated => "Your entry was successfully updated!",
            FlashMessage::EntryDeleted => "Your entry was successfully deleted!",
        }
    }
}

/// Store a message for the next rendered page.
pub fn set(jar: CookieJar, message: FlashMessage) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Read the pending message and clear it.
///
/// Unknown codes are dropped without a message.
pub fn take(jar: CookieJar) -> (CookieJar, Option<FlashMessage>) {
    let Some(code) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, FlashMessage::from_code(&code))
}
