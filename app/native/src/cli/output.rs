//! CLI output formatting utilities.
//!
//! This module provides utilities for formatting CLI output including:
//! - JSON syntax highlighting
//! - Cell formatting for tables

use std::fmt::Write;

use colored::Colorize;

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (default)
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json_str = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json_str));
}

/// Returns a pretty-printed JSON string with color codes applied.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut in_string = false;
    let mut is_key = false;
    let mut escape_next = false;
    let mut after_colon = false;
    let mut token = String::new();

    for ch in json.chars() {
        if escape_next {
            token.push(ch);
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            token.push(ch);
            escape_next = true;
            continue;
        }

        match ch {
            '"' if in_string => {
                token.push(ch);
                let colored = if is_key { token.cyan() } else { token.green() };
                let _ = write!(out, "{colored}");
                token.clear();
                in_string = false;
                is_key = false;
            }
            '"' => {
                flush_token(&mut out, &mut token, after_colon);
                token.push(ch);
                in_string = true;
                // Strings not preceded by a colon are keys
                is_key = !after_colon;
                after_colon = false;
            }
            ':' if !in_string => {
                flush_token(&mut out, &mut token, false);
                let _ = write!(out, "{}", ":".white());
                after_colon = true;
            }
            ',' if !in_string => {
                flush_token(&mut out, &mut token, after_colon);
                let _ = write!(out, "{}", ",".white());
                after_colon = false;
            }
            '{' | '}' | '[' | ']' if !in_string => {
                flush_token(&mut out, &mut token, after_colon);
                let _ = write!(out, "{}", ch.to_string().white().bold());
                after_colon = false;
            }
            _ => token.push(ch),
        }
    }

    flush_token(&mut out, &mut token, after_colon);
    out
}

/// Appends the pending token, coloring bare values.
fn flush_token(out: &mut String, token: &mut String, is_value: bool) {
    if token.is_empty() {
        return;
    }

    let start = token.find(|c: char| !c.is_whitespace());
    match start {
        Some(start) if is_value => {
            let end = token.rfind(|c: char| !c.is_whitespace()).map_or(token.len(), |i| i + 1);
            let (prefix, value, suffix) = (&token[..start], &token[start..end], &token[end..]);

            if matches!(value, "true" | "false" | "null") {
                let _ = write!(out, "{prefix}{}{suffix}", value.magenta());
            } else if value.parse::<f64>().is_ok() {
                let _ = write!(out, "{prefix}{}{suffix}", value.yellow());
            } else {
                out.push_str(token);
            }
        }
        _ => out.push_str(token),
    }

    token.clear();
}

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
///
/// Counts characters rather than bytes, so multi-byte identities are cut on
/// a character boundary.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        "…".to_string()
    } else {
        let truncate_at = s.char_indices().nth(max_chars - 1).map_or(s.len(), |(idx, _)| idx);
        format!("{}…", &s[..truncate_at])
    }
}

/// Formats a length for a table cell, in pixels or percent.
#[must_use]
pub fn format_length(value: f64, percent: bool) -> String {
    if percent { format!("{value:.2}%") } else { format!("{value:.1}") }
}

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}
