use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use motd_plugin::{compose_motd, MotdConfig};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn config(json: &str) -> MotdConfig {
    serde_json::from_str(json).unwrap()
}

#[test]
fn full_motd_for_a_categorized_config() {
    let config = config(
        r#"{
            "serverName": "HLCC",
            "mainServerName": "HLCC",
            "serverList": [
                { "name": "A", "category": "X" },
                { "name": "B", "category": "Y" },
                { "name": "C", "category": "X" }
            ],
            "start_day": "2025-02-01"
        }"#,
    );

    let lines = compose_motd(&config, midnight(2025, 2, 5));
    let plain: Vec<String> = lines.iter().map(|l| l.to_plain()).collect();

    assert_eq!(
        plain,
        vec![
            "======= Welcome back to HLCC =======".to_string(),
            "今天是HLCC开服的第4天".to_string(),
            "------- Server List -------".to_string(),
            // Categories in first-seen order, entries keeping their
            // relative order within each category
            "X: [A] [C]".to_string(),
            "Y: [B]".to_string(),
        ]
    );
}

#[test]
fn bare_string_entries_render_one_headerless_line() {
    let config = config(r#"{ "serverList": ["Main", "Mirror"] }"#);

    let lines = compose_motd(&config, midnight(2025, 2, 5));

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3].to_plain(), "[Main] [Mirror]");
}

#[test]
fn empty_server_list_renders_banners_only() {
    let config = config(r#"{ "serverList": [] }"#);

    let lines = compose_motd(&config, midnight(2025, 2, 5));

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].to_plain(), "------- Server List -------");
}

#[test]
fn malformed_start_day_shows_placeholder_age() {
    let config = config(r#"{ "start_day": "not-a-date" }"#);

    let lines = compose_motd(&config, midnight(2025, 2, 5));

    assert_eq!(lines[1].to_plain(), "今天是HLCC开服的第?天");
}

#[test]
fn compose_is_deterministic_for_identical_inputs() {
    let config = config(
        r#"{
            "serverList": [
                "Main",
                { "name": "Creative", "description": "free build", "category": "Fun" }
            ]
        }"#,
    );
    let now = midnight(2025, 6, 1);

    assert_eq!(compose_motd(&config, now), compose_motd(&config, now));
}

#[test]
fn tokens_carry_click_commands_and_hover_text() {
    let config = config(
        r#"{
            "serverList": [
                { "name": "Creative", "description": "desc", "category": "Fun" },
                { "name": "Survival", "category": "Fun" }
            ]
        }"#,
    );

    let lines = compose_motd(&config, midnight(2025, 2, 5));
    let spans = lines[3].spans();

    // header, token, separator, token
    assert_eq!(spans[0].text(), "Fun: ");
    assert_eq!(spans[1].text(), "[Creative]");
    assert_eq!(spans[1].click_event().unwrap().value, "/server Creative");
    assert_eq!(spans[1].hover_text(), Some("desc\n/server Creative"));
    assert_eq!(spans[3].text(), "[Survival]");
    assert_eq!(spans[3].hover_text(), Some("/server Survival"));
}
