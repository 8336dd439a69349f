// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry list, entry form and delete confirmation pages.

use std::fmt::Write as _;

use crate::flash::FlashMessage;
use crate::models::entry_form::{fields, DATE_FORMAT, NOTES_MAX_LENGTH};
use crate::models::{Entry, EntryForm, EntrySummary, ValidationErrors};
use crate::services::ActivityCatalog;
use crate::time_utils::format_minutes;
use crate::views::{escape, layout};

/// Shown in place of the average when there are no active days.
pub const NO_DATA: &str = "n/a";

/// Which action the entry form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add Entry",
            FormMode::Edit => "Edit Entry",
        }
    }

    fn action(self) -> &'static str {
        match self {
            FormMode::Add => "/entries/add",
            FormMode::Edit => "/entries/edit",
        }
    }
}

/// Entry list with activity totals.
pub fn list_page(
    entries: &[Entry],
    summary: &EntrySummary,
    activities: &ActivityCatalog,
    flash: Option<FlashMessage>,
) -> String {
    let average = summary
        .average_daily_activity
        .map_or_else(|| NO_DATA.to_string(), |avg| format!("{} minutes", format_minutes(avg)));

    let mut content = format!(
        r#"<div class="summary">
<p id="total-activity">Total Activity: {} minutes</p>
<p id="average-daily-activity">Average Daily Activity: {}</p>
</div>
<p><a href="/entries/add">Add Entry</a></p>
"#,
        format_minutes(summary.total_activity),
        average,
    );

    if entries.is_empty() {
        content.push_str("<p>No entries yet.</p>\n");
        return layout("Entries", flash, &content);
    }

    content.push_str(
        "<table>\n<thead><tr><th>Date</th><th>Activity</th><th>Duration</th>\
         <th>Distance</th><th>Notes</th><th>Excluded</th><th></th></tr></thead>\n<tbody>\n",
    );
    for entry in entries {
        let _ = writeln!(
            content,
            r#"<tr id="entry-{id}"><td>{date}</td><td>{activity}</td><td>{duration}</td><td>{distance}</td><td>{notes}</td><td>{exclude}</td><td><a href="/entries/edit/{id}">Edit</a> <a href="/entries/delete/{id}">Delete</a></td></tr>"#,
            id = entry.id,
            date = entry.date.format(DATE_FORMAT),
            activity = escape(activities.name_of(entry.activity_id)),
            duration = format_minutes(entry.duration),
            distance = entry.distance.map(format_minutes).unwrap_or_default(),
            notes = escape(entry.notes.as_deref().unwrap_or("")),
            exclude = if entry.exclude { "Yes" } else { "" },
        );
    }
    content.push_str("</tbody>\n</table>\n");

    layout("Entries", flash, &content)
}

/// Add or edit form, pre-filled with `form` and showing `errors`.
pub fn form_page(
    mode: FormMode,
    form: &EntryForm,
    errors: &ValidationErrors,
    activities: &ActivityCatalog,
) -> String {
    let mut content = String::new();

    if !errors.is_empty() {
        content.push_str(
            "<p class=\"validation-summary\">Please correct the errors below.</p>\n",
        );
    }

    let _ = writeln!(content, r#"<form method="post" action="{}">"#, mode.action());

    if mode == FormMode::Edit {
        let _ = writeln!(
            content,
            r#"<input type="hidden" name="{}" value="{}">"#,
            fields::ID,
            value_of(&form.id)
        );
    }

    let _ = writeln!(
        content,
        r#"<label for="{name}">Date</label><input type="date" id="{name}" name="{name}" value="{value}">"#,
        name = fields::DATE,
        value = value_of(&form.date),
    );
    push_errors(&mut content, errors, fields::DATE);

    let selected = form.activity_id.as_deref().map(str::trim).unwrap_or("");
    let _ = write!(
        content,
        r#"<label for="{name}">Activity</label><select id="{name}" name="{name}"><option value="">Select an activity...</option>"#,
        name = fields::ACTIVITY,
    );
    for (id, name) in activities.selection_list() {
        let id = id.to_string();
        let _ = write!(
            content,
            r#"<option value="{}"{}>{}</option>"#,
            id,
            if id == selected { " selected" } else { "" },
            escape(name)
        );
    }
    content.push_str("</select>\n");
    push_errors(&mut content, errors, fields::ACTIVITY);

    let _ = writeln!(
        content,
        r#"<label for="{name}">Duration (minutes)</label><input type="number" step="any" id="{name}" name="{name}" value="{value}">"#,
        name = fields::DURATION,
        value = value_of(&form.duration),
    );
    push_errors(&mut content, errors, fields::DURATION);

    let _ = writeln!(
        content,
        r#"<label for="{name}">Distance</label><input type="number" step="any" id="{name}" name="{name}" value="{value}">"#,
        name = fields::DISTANCE,
        value = value_of(&form.distance),
    );
    push_errors(&mut content, errors, fields::DISTANCE);

    let _ = writeln!(
        content,
        r#"<label for="{name}">Notes</label><textarea id="{name}" name="{name}" maxlength="{max}">{value}</textarea>"#,
        name = fields::NOTES,
        max = NOTES_MAX_LENGTH,
        value = value_of(&form.notes),
    );
    push_errors(&mut content, errors, fields::NOTES);

    let _ = writeln!(
        content,
        r#"<label><input type="checkbox" name="{}" value="true"{}> Exclude from totals</label>"#,
        fields::EXCLUDE,
        if form.is_excluded() { " checked" } else { "" },
    );

    content.push_str(
        "<p><button type=\"submit\">Save</button> <a href=\"/entries\">Cancel</a></p>\n</form>\n",
    );

    layout(mode.title(), None, &content)
}

/// Confirmation page shown before an entry is deleted.
pub fn delete_page(entry: &Entry, activities: &ActivityCatalog) -> String {
    let content = format!(
        r#"<p>Are you sure you want to delete this entry?</p>
<dl>
<dt>Date</dt><dd>{date}</dd>
<dt>Activity</dt><dd>{activity}</dd>
<dt>Duration</dt><dd>{duration} minutes</dd>
</dl>
<form method="post" action="/entries/delete/{id}">
<p><button type="submit">Delete</button> <a href="/entries">Cancel</a></p>
</form>
"#,
        id = entry.id,
        date = entry.date.format(DATE_FORMAT),
        activity = escape(activities.name_of(entry.activity_id)),
        duration = format_minutes(entry.duration),
    );

    layout("Delete Entry", None, &content)
}

fn value_of(value: &Option<String>) -> String {
    escape(value.as_deref().unwrap_or(""))
}

fn push_errors(content: &mut String, errors: &ValidationErrors, field: &str) {
    for message in errors.messages_for(field) {
        let _ = writeln!(
            content,
            r#"<span class="field-error" data-field="{}">{}</span>"#,
            field,
            escape(message)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: u64, notes: Option<&str>) -> Entry {
        let mut entry = Entry::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 6, 30.0);
        entry.id = id;
        entry.notes = notes.map(String::from);
        entry
    }

    #[test]
    fn test_list_page_shows_totals_and_rows() {
        let entries = vec![entry(1, Some("<script>")), entry(2, None)];
        let summary = EntrySummary::from_entries(&entries);

        let page = list_page(&entries, &summary, &ActivityCatalog::default(), None);

        assert!(page.contains("Total Activity: 60 minutes"));
        assert!(page.contains("Average Daily Activity: 60 minutes"));
        assert!(page.contains(r#"<tr id="entry-1">"#));
        assert!(page.contains("/entries/edit/2"));
        assert!(page.contains("Running"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_list_page_without_entries() {
        let summary = EntrySummary::from_entries(&[]);

        let page = list_page(&[], &summary, &ActivityCatalog::default(), None);

        assert!(page.contains("Average Daily Activity: n/a"));
        assert!(page.contains("No entries yet."));
    }

    #[test]
    fn test_form_page_marks_selected_activity_and_errors() {
        let form = EntryForm {
            activity_id: Some("3".to_string()),
            duration: Some("0".to_string()),
            exclude: Some("true".to_string()),
            ..EntryForm::draft(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
        };
        let mut errors = ValidationErrors::new();
        errors.add(fields::DURATION, "The duration field must be greater than 0");

        let page = form_page(FormMode::Add, &form, &errors, &ActivityCatalog::default());

        assert!(page.contains(r#"action="/entries/add""#));
        assert!(page.contains(r#"value="2024-04-01""#));
        assert!(page.contains(r#"<option value="3" selected>Hiking</option>"#));
        assert!(page.contains("The duration field must be greater than 0"));
        assert!(page.contains(" checked>"));
        assert!(!page.contains(r#"type="hidden""#));
    }

    #[test]
    fn test_edit_form_carries_id() {
        let form = EntryForm::from_entry(&entry(9, None));

        let page = form_page(
            FormMode::Edit,
            &form,
            &ValidationErrors::new(),
            &ActivityCatalog::default(),
        );

        assert!(page.contains(r#"<input type="hidden" name="id" value="9">"#));
        assert!(page.contains(r#"action="/entries/edit""#));
        assert!(!page.contains("validation-summary"));
    }

    #[test]
    fn test_delete_page_posts_to_entry() {
        let page = delete_page(&entry(4, None), &ActivityCatalog::default());

        assert!(page.contains(r#"action="/entries/delete/4""#));
        assert!(page.contains("30 minutes"));
    }
}
