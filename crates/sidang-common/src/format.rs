//! Indonesian date and ordinal formatting.
//!
//! All lookups are static tables. Inputs outside a table's range produce an
//! empty string, except [`ordinal_word`] which falls back to `"ke-N"`.

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekday names, Monday first.
const WEEKDAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const ORDINALS: [&str; 10] = [
    "Pertama",
    "Kedua",
    "Ketiga",
    "Keempat",
    "Kelima",
    "Keenam",
    "Ketujuh",
    "Kedelapan",
    "Kesembilan",
    "Kesepuluh",
];

/// Indonesian name of a weekday.
///
/// ```
/// use chrono::Weekday;
/// use sidang_common::weekday_name;
///
/// assert_eq!(weekday_name(Weekday::Mon), "Senin");
/// assert_eq!(weekday_name(Weekday::Sun), "Minggu");
/// ```
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize]
}

/// Indonesian weekday name by ISO number (1 = Monday, 7 = Sunday).
///
/// Returns `""` for numbers outside 1..=7.
pub fn weekday_name_from_number(number: u32) -> &'static str {
    match number {
        1..=7 => WEEKDAYS[(number - 1) as usize],
        _ => "",
    }
}

/// Indonesian month name (1 = Januari). Returns `""` outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => "",
    }
}

/// Long-form date, e.g. `"5 Maret 2025"`. The day is not zero-padded.
///
/// ```
/// use chrono::NaiveDate;
/// use sidang_common::format_long_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
/// assert_eq!(format_long_date(date), "5 Maret 2025");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// Ordinal word for an exam sitting: `Pertama` through `Kesepuluh`, then
/// `"ke-N"` for anything past the table (and for zero).
///
/// ```
/// use sidang_common::ordinal_word;
///
/// assert_eq!(ordinal_word(2), "Kedua");
/// assert_eq!(ordinal_word(11), "ke-11");
/// ```
pub fn ordinal_word(n: u32) -> String {
    match n {
        1..=10 => ORDINALS[(n - 1) as usize].to_string(),
        _ => format!("ke-{n}"),
    }
}
