//! Calendar-independant solar (Gregorian) date.

use std::fmt;
use std::ops::{Add, Sub};

/// A solar date, stored as a Julian day number.
///
/// Ordering and day arithmetic work directly on the day number, so comparing
/// two dates or taking their difference needs no calendar math.
///
/// # Example
///
/// ```
/// use nongli::SolarDate;
///
/// let date = SolarDate::from_ymd(2000, 1, 1).unwrap();
///
/// assert_eq!(6, date.day_of_week()); // Saturday
/// assert_eq!(2451545, date.jdn());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SolarDate {
    jdn: u32,
}

impl SolarDate {
    /// Creates a `SolarDate` from a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `SolarDate` from a Gregorian calendar date.
    ///
    /// `year` is an astronomical year number (1 BC is `0`).
    ///
    /// Returns `None` for dates that are not calendar-valid (month outside
    /// `1..=12`, day outside the actual length of that month, e.g. February
    /// 29 in a common year) or outside the representable range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::SolarDate;
    ///
    /// assert!(SolarDate::from_ymd(2000, 2, 29).is_some());
    /// assert!(SolarDate::from_ymd(2001, 2, 29).is_none());
    /// ```
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        let (y, m, d) = (year, month, day);
        let date = u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()?;
        // The JDN formula silently normalizes overflowing days (Feb 30 becomes
        // Mar 2); a round trip exposes them.
        if date.ymd() != (year, month, day) {
            return None;
        }
        Some(date)
    }

    /// Represents the date in Gregorian calendar, as `(year, month, day)`.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::SolarDate;
    ///
    /// let date = SolarDate::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.ymd());
    /// ```
    pub fn ymd(&self) -> (i32, i32, i32) {
        let jdn = i32::try_from(self.jdn).expect("jdn >= 2**31 not supported");
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }

    /// Formats the date in ISO 8601 format (`2000-01-01`).
    pub fn iso(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Formats the date in the Chinese convention with zero-padded month and
    /// day (`2000年01月01日`).
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::SolarDate;
    ///
    /// let date = SolarDate::from_ymd(2000, 1, 1).unwrap();
    /// assert_eq!("2000年01月01日", date.cn());
    /// ```
    pub fn cn(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{}年{:02}月{:02}日", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (`1..=7`
    /// for Monday through Sunday).
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::SolarDate;
    ///
    /// let date = SolarDate::from_ymd(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso())
    }
}

impl Add<i32> for SolarDate {
    type Output = SolarDate;
    fn add(self, rhs: i32) -> Self::Output {
        SolarDate::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<SolarDate> for SolarDate {
    type Output = i32;
    fn sub(self, rhs: SolarDate) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}
