use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Decodes a YYMMDD folder name into its calendar date.
///
/// Post folders on the CDN are named after their publication date with the
/// year offset from 2000, e.g. `230101` for 2023-01-01. Anything that is not
/// exactly 6 ASCII digits, or that encodes an impossible date such as
/// `250230`, yields None.
pub fn parse_folder_name(name: &str) -> Option<NaiveDate> {
    lazy_static! {
        static ref FOLDER_REGEX: Regex = Regex::new(r"^\d{6}$").unwrap();
    }

    if !FOLDER_REGEX.is_match(name) {
        return None;
    }

    // The regex guarantees the slices are pure ASCII digits
    let year: i32 = 2000 + name[0..2].parse::<i32>().ok()?;
    let month: u32 = name[2..4].parse().ok()?;
    let day: u32 = name[4..6].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
