// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-side HTML rendering.

pub mod entries;

use crate::flash::FlashMessage;

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem auto;max-width:60rem;color:#222}\
table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
.flash{background:#e6f4ea;border:1px solid #9c9;padding:.6rem;margin-bottom:1rem}\
.field-error{color:#b00020;display:block}\
.summary{display:flex;gap:2rem;margin:1rem 0}\
label{display:block;margin-top:.8rem}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the site layout.
pub fn layout(title: &str, flash: Option<FlashMessage>, content: &str) -> String {
    let banner = flash
        .map(|m| format!(r#"<div class="flash">{}</div>"#, escape(m.text())))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Fitness Frog</title>
<style>{STYLE}</style>
</head>
<body>
<header><a href="/entries">Fitness Frog</a></header>
<main>
{banner}<h1>{title}</h1>
{content}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}
