use serde_json::Value;

/// Normalizes a zone identifier coming from the backend into a grouping key.
///
/// Numbers and strings are both accepted; integral floats lose their fraction so `7539`, `7539.0`
/// and `"7539"` all map to `"7539"`. Blank strings and any other JSON type yield `None`.
pub fn normalize_zone_id(value: &Value) -> Option<String> {
    match value {
        Value::String(zone) => {
            let zone = zone.trim();
            (!zone.is_empty()).then(|| zone.to_string())
        }
        Value::Number(number) => {
            if let Some(zone) = number.as_i64() {
                Some(zone.to_string())
            } else if let Some(zone) = number.as_u64() {
                Some(zone.to_string())
            } else {
                number
                    .as_f64()
                    .filter(|zone| zone.is_finite())
                    .map(|zone| if zone.fract() == 0.0 { format!("{zone:.0}") } else { zone.to_string() })
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(7539), Some("7539"))]
    #[case(json!(7539.0), Some("7539"))]
    #[case(json!("7539"), Some("7539"))]
    #[case(json!(" 12 "), Some("12"))]
    #[case(json!(12.5), Some("12.5"))]
    #[case(json!(""), None)]
    #[case(json!("   "), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    #[case(json!([1]), None)]
    fn normalizes_zone_ids(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(normalize_zone_id(&value).as_deref(), expected);
    }
}
