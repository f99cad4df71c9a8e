/// Strips zero seconds and minutes from a backend time, e.g. `"07:00:00"` to `"07"` and
/// `"07:30:00"` to `"07:30"`.
pub fn trim_time(time: &str) -> String {
    let time = time.replacen(":00:00", "", 1);
    match time.strip_suffix(":00") {
        Some(trimmed) => trimmed.to_string(),
        None => time,
    }
}

/// Renders an `H`, `HH` or `HH:MM` time on the 12-hour clock, e.g. `"18:30"` as `"6:30 pm"`.
/// Unparseable components count as zero; an empty input stays empty.
pub fn to_am_pm(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    let (hour, minute) = match time.split_once(':') {
        Some((hour, rest)) => (leading_number(hour), leading_number(rest.split(':').next().unwrap_or_default())),
        None => (leading_number(time), 0),
    };

    let suffix = if hour >= 12 { "pm" } else { "am" };
    let hour = (hour + 11) % 12 + 1;
    if minute == 0 {
        format!("{hour} {suffix}")
    } else {
        format!("{hour}:{minute:02} {suffix}")
    }
}

fn leading_number(text: &str) -> u32 {
    text.trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .fold(0u32, |number, digit| number.saturating_mul(10).saturating_add(digit.to_digit(10).unwrap_or_default()))
}
