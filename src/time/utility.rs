use chrono::NaiveDate;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`; 0 for an out-of-range month.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 0 || month > 12 {
        return 0;
    }

    if month == 2 && is_leap(year) {
        29
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Builds `year-month-day`, pulling `day` back to the month end when the
/// month is shorter (Jan 31 -> Feb 29 in a leap year).
pub fn clamped_ymd (year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_of_month(year, month);
    if last == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day.min(last))
}
