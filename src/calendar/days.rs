use chrono::{Month, NaiveDate};

/// Number of days in `month` (1-12) of `year`, `None` for an invalid month
/// or a year outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Every valid date of `month` in `year`, in order.
pub fn days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(len) = days_in_month(year, month) else {
        return Vec::new();
    };
    (1..=len)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Every date of `year`, January 1st first.
pub fn days_of_year(year: i32) -> Vec<NaiveDate> {
    (1..=12).flat_map(|month| days_of_month(year, month)).collect()
}

/// English name of `month` (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}
