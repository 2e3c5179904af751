// SPDX-License-Identifier: Apache-2.0

//! Loose object-literal extraction.
//!
//! Seed sources are hand-authored data files in a relaxed literal syntax:
//! bare identifier keys, single-quoted strings, trailing commas. This
//! module slices out the one top-level array and normalizes it to strict
//! JSON with a single-pass scanner over the relaxed grammar.
//!
//! Best-effort by design: the first-`[`/last-`]` span heuristic assumes the
//! file holds exactly one top-level array, and the scanner does not handle
//! computed keys, comments, or template strings. Anything that fails to
//! normalize parses to an empty array rather than an error.

use serde_json::Value;
use tracing::info;

/// Extracts and normalizes the array-of-objects region of `raw`.
///
/// With a `marker`, the span starts at the first `[` at or after the
/// marker's position; without one, at the first `[` in the text. The span
/// always ends at the last `]` in the whole text. Returns an empty array
/// when no span is found or the normalized span is not valid JSON.
#[must_use]
pub fn extract_array(raw: &str, marker: Option<&str>) -> Value {
    let Some(span) = locate_array(raw, marker) else {
        return Value::Array(Vec::new());
    };
    let normalized = normalize(span);
    match serde_json::from_str::<Value>(&normalized) {
        Ok(Value::Array(items)) => Value::Array(items),
        Ok(_) => {
            info!("loose-literal span parsed but is not an array");
            Value::Array(Vec::new())
        }
        Err(err) => {
            info!(error = %err, "loose-literal span failed to parse after normalization");
            Value::Array(Vec::new())
        }
    }
}

fn locate_array<'a>(raw: &'a str, marker: Option<&str>) -> Option<&'a str> {
    let search_from = match marker {
        Some(needle) => raw.find(needle)?,
        None => 0,
    };
    let start = search_from + raw[search_from..].find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Rewrites the relaxed literal span into strict JSON: quotes bare keys
/// after `{` or `,`, converts single-quoted strings, drops trailing commas.
fn normalize(span: &str) -> String {
    let chars: Vec<char> = span.chars().collect();
    let mut out = String::with_capacity(span.len() + 16);
    // Last non-whitespace character emitted; drives bare-key detection.
    let mut prev = '\0';
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '"' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    out.push(c);
                    i += 1;
                    if c == '\\' {
                        if i < chars.len() {
                            out.push(chars[i]);
                            i += 1;
                        }
                    } else if c == '"' {
                        break;
                    }
                }
                prev = '"';
            }
            '\'' => {
                i += 1;
                out.push('"');
                while i < chars.len() {
                    let c = chars[i];
                    if c == '\\' && i + 1 < chars.len() && chars[i + 1] == '\'' {
                        out.push('\'');
                        i += 2;
                    } else if c == '\\' && i + 1 < chars.len() {
                        out.push('\\');
                        out.push(chars[i + 1]);
                        i += 2;
                    } else if c == '\'' {
                        i += 1;
                        break;
                    } else {
                        if c == '"' {
                            out.push('\\');
                        }
                        out.push(c);
                        i += 1;
                    }
                }
                out.push('"');
                prev = '"';
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                    // trailing comma before a closer: drop it
                    i += 1;
                } else {
                    out.push(',');
                    prev = ',';
                    i += 1;
                }
            }
            c if is_ident_char(c) && (prev == '{' || prev == ',') => {
                let start = i;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                let ident: String = chars[start..i].iter().collect();
                let mut j = i;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ':' {
                    out.push('"');
                    out.push_str(&ident);
                    out.push('"');
                    prev = '"';
                } else {
                    out.push_str(&ident);
                    prev = ident.chars().last().unwrap_or(c);
                }
            }
            c => {
                out.push(c);
                if !c.is_whitespace() {
                    prev = c;
                }
                i += 1;
            }
        }
    }

    out
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
