use chrono::{Datelike, Weekday};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DayType {
    Weekday,
    Saturday,
    Sunday,
}

impl DayType {
    pub fn for_date(date: &impl Datelike) -> Self {
        match date.weekday() {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Saturday => "Saturday",
            DayType::Sunday => "Sunday",
        }
    }
}

impl Display for DayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), DayType::Weekday)]
    #[case(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(), DayType::Saturday)]
    #[case(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), DayType::Sunday)]
    #[case(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), DayType::Weekday)]
    fn derives_the_day_type_from_a_date(#[case] date: NaiveDate, #[case] expected: DayType) {
        assert_eq!(DayType::for_date(&date), expected);
    }

    #[test]
    fn displays_as_the_backend_expects() {
        assert_eq!(DayType::Saturday.to_string(), "Saturday");
    }
}
