//! Lunisolar (Chinese calendar) birthday projection.
//!
//! Given a Gregorian birth date, this crate resolves the corresponding
//! lunisolar date and projects the recurring lunisolar birthday onto future
//! Gregorian dates, optionally including leap-month recurrences. Conversion
//! uses a packed month-length table covering lunar years 1900 through 2099.
//!
//! # Examples
//!
//! Basic usage with [`SolarDate`]:
//!
//! ```
//! use nongli::SolarDate;
//!
//! let date = SolarDate::from_ymd(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Converting to the lunisolar calendar:
//!
//! ```
//! use nongli::SolarDate;
//! use nongli::lunar::{LunarCalendar, Month, TableCalendar};
//!
//! let date = SolarDate::from_ymd(2000, 1, 1).unwrap();
//! let lunar = TableCalendar.solar_to_lunar(date).unwrap();
//!
//! assert_eq!((1999, Month::Common(11), 25), (lunar.year, lunar.month, lunar.day));
//! ```
//!
//! Projecting birthdays:
//!
//! ```
//! use nongli::lunar::TableCalendar;
//! use nongli::{SolarDate, project_birthdays};
//!
//! let birth = SolarDate::from_ymd(2000, 1, 1).unwrap();
//! let today = SolarDate::from_ymd(2026, 8, 30).unwrap();
//! let projection = project_birthdays(&TableCalendar, birth, 100, true, today).unwrap();
//!
//! assert_eq!("农历1999年冬月廿五", projection.birth_lunar);
//! ```

pub mod date;
pub mod lunar;
pub mod projector;
pub mod server;

pub use date::SolarDate;
pub use projector::{BirthdayProjection, Occurrence, project_birthdays};
