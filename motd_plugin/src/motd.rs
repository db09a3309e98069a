//! MOTD composition.
//!
//! [`compose_motd`] is a pure function of the configuration and an injected
//! clock reading; the host-facing callbacks in [`crate::plugin`] do nothing
//! but forward its output. The only fallible step, parsing the configured
//! start date, is caught here and degraded to a placeholder.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;

use motd_text::{ClickAction, Color, Line, Span};

use crate::config::{MotdConfig, ServerEntry};

/// Day count shown when the configured start date cannot be parsed
const UNKNOWN_AGE: &str = "?";

fn day_count(start_day: &str, now: NaiveDateTime) -> Result<i64, chrono::ParseError> {
    let start = NaiveDate::parse_from_str(start_day, "%Y-%m-%d")?.and_time(NaiveTime::MIN);
    // Whole days, flooring: twelve hours before the start date is day -1
    Ok((now - start).num_seconds().div_euclid(86_400))
}

/// Age display for the day-counter banner: whole days from the configured
/// start date (at midnight) to `now`, negative if `now` precedes it. A
/// missing or malformed date logs one warning and yields `"?"`; the failure
/// never propagates.
pub fn server_age(config: &MotdConfig, now: NaiveDateTime) -> String {
    match &config.start_day {
        Some(start_day) => match day_count(start_day, now) {
            Ok(days) => days.to_string(),
            Err(e) => {
                tracing::warn!("Failed to parse start_day {:?}: {}", start_day, e);
                UNKNOWN_AGE.to_string()
            }
        },
        None => {
            tracing::warn!("Failed to parse start_day: not configured");
            UNKNOWN_AGE.to_string()
        }
    }
}

/// The clickable `[name]` token for one server entry
fn server_token(entry: &ServerEntry) -> Span {
    let command = format!("/server {}", entry.name);
    let hover = match &entry.description {
        Some(description) => format!("{}\n{}", description, command),
        None => command.clone(),
    };
    Span::plain(format!("[{}]", entry.name))
        .hover(hover)
        .click(ClickAction::RunCommand, command)
}

/// Compose the full MOTD for one recipient: two banner lines, the server
/// list header, then one line per category of `serverList` in first-seen
/// category order, entries keeping their relative order within each line.
pub fn compose_motd(config: &MotdConfig, now: NaiveDateTime) -> Vec<Line> {
    let mut lines = Vec::new();

    lines.push(
        Line::new()
            .with(Span::colored("=======", Color::Gray))
            .with(Span::plain(" Welcome back to "))
            .with(Span::colored(config.server_name.as_str(), Color::Yellow))
            .with(Span::colored(" =======", Color::Gray)),
    );

    lines.push(
        Line::new()
            .with(Span::plain("今天是"))
            .with(Span::colored(config.main_server_name.as_str(), Color::Yellow))
            .with(Span::plain("开服的第"))
            .with(Span::colored(server_age(config, now), Color::Yellow))
            .with(Span::plain("天")),
    );

    lines.push(
        Line::new()
            .with(Span::colored("-------", Color::Gray))
            .with(Span::plain(" Server List "))
            .with(Span::colored("-------", Color::Gray)),
    );

    let mut groups: IndexMap<&str, Vec<&ServerEntry>> = IndexMap::new();
    for entry in &config.server_list {
        groups.entry(entry.category.as_str()).or_default().push(entry);
    }

    for (category, entries) in groups {
        if entries.is_empty() {
            continue;
        }
        let mut line = Line::new();
        if !category.is_empty() {
            line.push(Span::plain(format!("{}: ", category)));
        }
        line.append(Line::join(" ", entries.into_iter().map(server_token)));
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap()
    }

    fn config_with_start(start_day: Option<&str>) -> MotdConfig {
        MotdConfig {
            start_day: start_day.map(str::to_string),
            ..MotdConfig::default()
        }
    }

    #[test]
    fn age_counts_whole_days() {
        let config = config_with_start(Some("2025-02-01"));
        assert_eq!(server_age(&config, at((2025, 2, 5), (0, 0, 0))), "4");
    }

    #[test]
    fn age_floors_partial_days() {
        let config = config_with_start(Some("2025-02-01"));
        assert_eq!(server_age(&config, at((2025, 2, 5), (23, 59, 59))), "4");
        assert_eq!(server_age(&config, at((2025, 2, 1), (0, 0, 1))), "0");
    }

    #[test]
    fn age_before_start_is_negative() {
        let config = config_with_start(Some("2025-02-01"));
        assert_eq!(server_age(&config, at((2025, 1, 31), (12, 0, 0))), "-1");
        assert_eq!(server_age(&config, at((2025, 1, 30), (0, 0, 0))), "-2");
    }

    #[test]
    fn malformed_start_day_degrades_to_placeholder() {
        let config = config_with_start(Some("not-a-date"));
        assert_eq!(server_age(&config, at((2025, 2, 5), (0, 0, 0))), "?");
    }

    #[test]
    fn missing_start_day_degrades_to_placeholder() {
        let config = config_with_start(None);
        assert_eq!(server_age(&config, at((2025, 2, 5), (0, 0, 0))), "?");
    }

    #[test]
    fn token_hover_includes_description_when_present() {
        let entry = ServerEntry {
            name: "Creative".to_string(),
            description: Some("desc".to_string()),
            category: String::new(),
        };
        let token = server_token(&entry);
        assert_eq!(token.text(), "[Creative]");
        assert_eq!(token.hover_text(), Some("desc\n/server Creative"));
        assert_eq!(token.click_event().unwrap().value, "/server Creative");
    }

    #[test]
    fn token_hover_is_bare_command_without_description() {
        let token = server_token(&ServerEntry::named("Creative"));
        assert_eq!(token.hover_text(), Some("/server Creative"));
    }
}
