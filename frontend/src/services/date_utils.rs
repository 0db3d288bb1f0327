use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Current instant from the browser clock, as local wall time.
pub fn now_local() -> NaiveDateTime {
    let now = js_sys::Date::new_0();
    let date = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default();
    date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
        .unwrap_or_default()
}

/// Today's date from the browser clock.
pub fn today() -> NaiveDate {
    now_local().date()
}

/// Short Norwegian weekday label for day column headers.
pub fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "man.",
        Weekday::Tue => "tir.",
        Weekday::Wed => "ons.",
        Weekday::Thu => "tor.",
        Weekday::Fri => "fre.",
        Weekday::Sat => "lør.",
        Weekday::Sun => "søn.",
    }
}

pub fn weekday_long(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "mandag",
        Weekday::Tue => "tirsdag",
        Weekday::Wed => "onsdag",
        Weekday::Thu => "torsdag",
        Weekday::Fri => "fredag",
        Weekday::Sat => "lørdag",
        Weekday::Sun => "søndag",
    }
}

fn month_short(month: u32) -> &'static str {
    match month {
        1 => "jan.",
        2 => "feb.",
        3 => "mar.",
        4 => "apr.",
        5 => "mai",
        6 => "jun.",
        7 => "jul.",
        8 => "aug.",
        9 => "sep.",
        10 => "okt.",
        11 => "nov.",
        12 => "des.",
        _ => "",
    }
}

/// "5. jun." style day-and-month label.
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{}. {}", date.day(), month_short(date.month()))
}

/// "mandag 5. jun. 2024" style full date label for booking cards.
pub fn format_full_date(date: NaiveDate) -> String {
    format!(
        "{} {}. {} {}",
        weekday_long(date),
        date.day(),
        month_short(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_norwegian_weekday_labels() {
        // 2024-06-03 is a Monday
        assert_eq!(weekday_short(date(2024, 6, 3)), "man.");
        assert_eq!(weekday_short(date(2024, 6, 9)), "søn.");
        assert_eq!(weekday_long(date(2024, 6, 5)), "onsdag");
    }

    #[test]
    fn test_date_labels() {
        assert_eq!(format_day_month(date(2024, 6, 5)), "5. jun.");
        assert_eq!(format_full_date(date(2024, 6, 5)), "onsdag 5. jun. 2024");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn now_local_matches_today() {
        assert_eq!(now_local().date(), today());
    }
}
