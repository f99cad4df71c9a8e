use crate::rules::clock::{to_am_pm, trim_time};
use crate::rules::vocabulary::{explain_code, nice_days};
use serde_json::{Map, Value};

const DAYS_KEYS: &[&str] = &["Restriction_Days", "Days", "DayType", "Day", "Day_Type"];
const DISPLAY_KEYS: &[&str] = &["Restriction_Display", "SignPlateText", "Sign", "Display"];
const START_KEYS: &[&str] = &["Time_Restrictions_Start", "Start", "StartTime"];
const FINISH_KEYS: &[&str] = &["Time_Restrictions_Finish", "End", "EndTime"];

/// A sign plate rule in display form.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ParkingRule {
    pub days: String,
    pub display: String,
    pub window: String,
    pub text: String,
    pub sentence: String,
}

impl ParkingRule {
    fn plain(text: String) -> Self {
        ParkingRule {
            sentence: text.clone(),
            text,
            ..Default::default()
        }
    }
}

/// Turns a raw rule from the backend into display text.
///
/// Rules are usually objects, but may arrive as JSON encoded strings or as free text; free text is
/// shown as is.
pub fn normalize_rule(raw: &Value) -> ParkingRule {
    match raw {
        Value::Object(fields) => normalize_fields(fields),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(fields)) => normalize_fields(&fields),
            Ok(Value::String(inner)) => ParkingRule::plain(inner),
            _ => ParkingRule::plain(text.clone()),
        },
        other => ParkingRule::plain(other.to_string()),
    }
}

fn normalize_fields(fields: &Map<String, Value>) -> ParkingRule {
    let days = first_text(fields, DAYS_KEYS);
    let display = first_text(fields, DISPLAY_KEYS);
    let start = trim_time(&first_text(fields, START_KEYS));
    let finish = trim_time(&first_text(fields, FINISH_KEYS));

    let window = if !start.is_empty() && !finish.is_empty() { format!("{start}–{finish}") } else { String::new() };

    let days_nice = nice_days(&days);
    let code_note = explain_code(&display);
    let (start, finish) = (to_am_pm(&start), to_am_pm(&finish));

    let sentence = match code_note {
        Some(note) if note.to_lowercase().starts_with("no parking") => format!("{days_nice}: No parking from {start} to {finish}."),
        Some(note) => format!("{days_nice}: {note}. You can park here from {start} to {finish}."),
        None => format!("{days_nice}: You can park here from {start} to {finish}."),
    };

    let text = [days.as_str(), display.as_str(), window.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ");

    ParkingRule {
        days,
        display,
        window,
        text,
        sentence,
    }
}

/// The first non-empty value among `keys`, rendered as text.
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.as_i64().map(|n| n.to_string()).unwrap_or_else(|| number.to_string())),
            _ => None,
        })
        .unwrap_or_default()
}
