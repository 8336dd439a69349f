// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field-level validation errors for submitted forms.

/// A single message attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldError {
    field: &'static str,
    message: String,
}

/// Validation errors collected while binding and checking a form.
///
/// Errors keep insertion order so the form shows them in the order the
/// checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// True when no errors were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when the given field has no errors yet.
    pub fn is_valid_field(&self, field: &str) -> bool {
        !self.errors.iter().any(|e| e.field == field)
    }

    /// Messages for one field, in insertion order.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_field_tracks_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(errors.is_valid_field("duration"));

        errors.add("date", "The Date field is required.");

        assert!(!errors.is_empty());
        assert!(!errors.is_valid_field("date"));
        assert!(errors.is_valid_field("duration"));
    }

    #[test]
    fn test_messages_for_keeps_order() {
        let mut errors = ValidationErrors::new();
        errors.add("notes", "first");
        errors.add("date", "other");
        errors.add("notes", "second");

        let notes: Vec<&str> = errors.messages_for("notes").collect();
        assert_eq!(notes, vec!["first", "second"]);
        assert_eq!(errors.len(), 3);
    }
}
