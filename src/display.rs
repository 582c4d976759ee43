//! Text formatting shared by the CLI and the TUI.

use std::sync::OnceLock;

use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Characters of `data_encoded` shown in list rows.
pub const PREVIEW_CHARS: usize = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimestampMode {
    #[default]
    Relative,
    Absolute,
}

impl TimestampMode {
    pub fn toggle(self) -> Self {
        match self {
            TimestampMode::Relative => TimestampMode::Absolute,
            TimestampMode::Absolute => TimestampMode::Relative,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimestampMode::Relative => "relative",
            TimestampMode::Absolute => "absolute",
        }
    }
}

fn sqlite_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
            .expect("valid time format")
    })
}

fn ui_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z",
        )
        .expect("valid time format")
    })
}

/// Parses `created_at`: SQLite `CURRENT_TIMESTAMP` text (UTC) or RFC 3339.
pub fn parse_created_at(ts: &str) -> Option<OffsetDateTime> {
    let ts = ts.trim();
    if let Ok(dt) = OffsetDateTime::parse(ts, &Rfc3339) {
        return Some(dt);
    }
    PrimitiveDateTime::parse(ts, sqlite_format())
        .ok()
        .map(|dt| dt.assume_utc())
}

/// Absolute UTC rendering, or the raw text when it does not parse.
pub fn fmt_ts_abs(ts: &str) -> String {
    parse_created_at(ts)
        .and_then(|dt| dt.to_offset(UtcOffset::UTC).format(ui_format()).ok())
        .unwrap_or_else(|| ts.to_string())
}

fn fmt_since(ts: &str, now: OffsetDateTime) -> Option<String> {
    let dt = parse_created_at(ts)?;
    let secs = (now - dt).whole_seconds();

    // Future timestamps (clock skew) show as absolute.
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    let s = if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else if days < 14 {
        format!("{}d ago", days)
    } else {
        return None;
    };
    Some(s)
}

pub fn fmt_ts(ts: &str, mode: TimestampMode, now: OffsetDateTime) -> String {
    match mode {
        TimestampMode::Relative => fmt_since(ts, now).unwrap_or_else(|| fmt_ts_abs(ts)),
        TimestampMode::Absolute => fmt_ts_abs(ts),
    }
}

/// One-line preview of an encoded payload: whitespace runs collapsed, cut at
/// `max_chars` with a trailing `...` when anything was dropped.
pub fn preview(data: &str, max_chars: usize) -> String {
    let flat = data.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
