/// Spells out the day ranges used on sign plates.
pub fn nice_days(days: &str) -> &str {
    match days {
        "Mon-Fri" | "Mon–Fri" => "Weekdays",
        "Sat-Sun" | "Sat–Sun" => "Saturday & Sunday",
        "Sat" => "Saturday",
        "Sun" => "Sunday",
        "" => "All days",
        other => other,
    }
}

/// Explains a sign plate restriction code, if it is a known one.
pub fn explain_code(code: &str) -> Option<&'static str> {
    match code {
        "MP2P" => Some("Max 2P (2-hour limit)"),
        "LZ30" => Some("Loading zone (30-min)"),
        "LZ15" => Some("Loading zone (15-min)"),
        "2P" => Some("2-hour limit"),
        "1P" => Some("1-hour limit"),
        "NP" => Some("No parking"),
        "P" => Some("General parking"),
        _ => None,
    }
}
