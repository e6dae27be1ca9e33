use chrono::NaiveDate;

/// First year of the Gregorian calendar for which the computation is valid.
pub const FIRST_EASTER_YEAR: i32 = 1583;
pub const LAST_EASTER_YEAR: i32 = 9999;

#[inline]
const fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// Western (Gregorian) Easter Sunday of `year`.
///
/// Closed-form computation after the US Naval Observatory algorithm; no
/// search over candidate dates. Returns `None` outside
/// [`FIRST_EASTER_YEAR`, `LAST_EASTER_YEAR`].
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if !(FIRST_EASTER_YEAR..=LAST_EASTER_YEAR).contains(&year) {
        return None;
    }

    let c = floor_div(year, 100);
    let n = year - 19 * floor_div(year, 19);
    let k = floor_div(c - 17, 25);
    let mut i = c - floor_div(c, 4) - floor_div(c - k, 3) + 19 * n + 15;
    i -= 30 * floor_div(i, 30);
    i -= floor_div(i, 28) * (1 - floor_div(i, 28) * floor_div(29, i + 1) * floor_div(21 - n, 11));
    let mut j = year + floor_div(year, 4) + i + 2 - c + floor_div(c, 4);
    j -= 7 * floor_div(j, 7);
    let l = i - j;
    let month = 3 + floor_div(l + 40, 44);
    let day = l + 28 - 31 * floor_div(month, 4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
