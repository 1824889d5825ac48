//! 农历（阴阳合历）与公历的互转。
//!
//! 本模块依预制年表编算农历，见 [`table`]。支持的时段为农历 1900 年正月初一
//! （公历 1900-01-31）至农历 2099 年岁末。
//!
//! 转换操作由 [`LunarCalendar`] trait 抽象，[`TableCalendar`] 为年表实现；
//! 上层的推算逻辑只依赖 trait，便于用合成闰月配置测试。

use std::fmt as std_fmt;

use thiserror::Error;

use crate::date::SolarDate;

pub mod fmt;
pub mod table;

/// 月名，`Common` 为平月，`Leap` 为闰月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 取得月序号，无论平闰。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 闰月为 `true`，平月为 `false`。
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，如「冬月」「闰六月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

impl std_fmt::Display for Month {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&self.name())
    }
}

/// 一个农历日期。
///
/// 不变式：`day` 不超过该月实际日数（29 或 30）；闰月仅当该年年表确有
/// 同序闰月时存在。经 [`LunarCalendar`] 取得的值均满足此不变式。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// 农历年。
    pub year: i32,
    /// 月份，含平闰信息。
    pub month: Month,
    /// 日序号，`1..=30`。
    pub day: u32,
}

impl LunarDate {
    /// 月日的文本形式，如「冬月廿五」「闰六月初一」。
    pub fn label(&self) -> String {
        self.month.name() + fmt::day(self.day)
    }
    /// 完整文本形式，如「农历1999年冬月廿五」。
    pub fn cn(&self) -> String {
        format!("农历{}年{}", self.year, self.label())
    }
}

impl std_fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&self.cn())
    }
}

/// 转换失败的原因。
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConversionError {
    /// 公历日期在历元前或年表末年岁末后。
    #[error("solar date {0} is outside the convertible range")]
    SolarOutOfRange(SolarDate),
    /// 农历年不在年表范围内。
    #[error("lunar year {0} is outside the supported range 1900..=2099")]
    YearOutOfRange(i32),
    /// 月序号不在 `1..=12` 间。
    #[error("month number {0} is not in 1..=12")]
    MonthOutOfRange(u32),
    /// 该年无此月（请求闰月而该年无同序闰月）。
    #[error("lunar year {year} has no month {month}")]
    NoSuchMonth { year: i32, month: Month },
    /// 该月无此日（日序号为 0 或超过该月实际日数）。
    #[error("lunar year {year} month {month} has no day {day}")]
    NoSuchDay { year: i32, month: Month, day: u32 },
}

/// 公历与农历互转的能力接口。
///
/// 两个操作均为全函数：任何输入都得到明确的成功或失败，调用方不得假定成功。
///
/// # 用例
///
/// ```
/// use nongli::SolarDate;
/// use nongli::lunar::{LunarCalendar, Month, TableCalendar};
///
/// let cal = TableCalendar;
/// let date = SolarDate::from_ymd(2000, 1, 1).unwrap();
/// let lunar = cal.solar_to_lunar(date).unwrap();
///
/// assert_eq!((1999, Month::Common(11), 25), (lunar.year, lunar.month, lunar.day));
/// assert_eq!(Ok(date), cal.lunar_to_solar(1999, Month::Common(11), 25));
/// ```
pub trait LunarCalendar {
    /// 公历转农历。
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, ConversionError>;
    /// 农历转公历。
    fn lunar_to_solar(
        &self,
        year: i32,
        month: Month,
        day: u32,
    ) -> Result<SolarDate, ConversionError>;
}

/// 依 [`table`] 年表实现的 [`LunarCalendar`]。
#[derive(Debug, Copy, Clone, Default)]
pub struct TableCalendar;

impl LunarCalendar for TableCalendar {
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, ConversionError> {
        let year = table::year_for(date).ok_or(ConversionError::SolarOutOfRange(date))?;
        let mut remaining = (date - year.new_year()) as u32;
        for (month, days) in year.months() {
            if remaining < days {
                return Ok(LunarDate {
                    year: year.year(),
                    month,
                    day: remaining + 1,
                });
            }
            remaining -= days;
        }
        unreachable!("date {} within bounds of lunar year {}", date, year.year())
    }

    fn lunar_to_solar(
        &self,
        year: i32,
        month: Month,
        day: u32,
    ) -> Result<SolarDate, ConversionError> {
        let y = table::Year::get(year).ok_or(ConversionError::YearOutOfRange(year))?;
        if !(1..=12).contains(&month.num()) {
            return Err(ConversionError::MonthOutOfRange(month.num()));
        }
        if month.is_leap() && y.leap_month() != Some(month.num()) {
            return Err(ConversionError::NoSuchMonth { year, month });
        }
        let len = if month.is_leap() {
            y.leap_month_days()
        } else {
            y.common_month_days(month.num())
        };
        if day == 0 || day > len {
            return Err(ConversionError::NoSuchDay { year, month, day });
        }
        let mut offset = 0;
        for (m, days) in y.months() {
            if m == month {
                return Ok(y.new_year() + (offset + day as i32 - 1));
            }
            offset += days as i32;
        }
        unreachable!("month {} of lunar year {} not in table", month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: i32, d: i32) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn to_lunar() {
        use Month::*;
        let dataset = [
            ((1900, 1, 31), (1900, Common(1), 1)),
            ((2000, 1, 1), (1999, Common(11), 25)),
            ((2017, 1, 27), (2016, Common(12), 30)),
            ((2017, 1, 28), (2017, Common(1), 1)),
            ((2017, 7, 22), (2017, Common(6), 29)),
            ((2017, 7, 23), (2017, Leap(6), 1)),
            ((2017, 8, 21), (2017, Leap(6), 30)),
            ((2017, 8, 22), (2017, Common(7), 1)),
        ];
        let cal = TableCalendar;
        for ((sy, sm, sd), (ly, lm, ld)) in dataset {
            let lunar = cal.solar_to_lunar(solar(sy, sm, sd)).unwrap();
            assert_eq!(
                (ly, lm, ld),
                (lunar.year, lunar.month, lunar.day),
                "{sy}-{sm}-{sd}"
            );
        }
    }

    #[test]
    fn to_lunar_out_of_range() {
        let cal = TableCalendar;
        for (y, m, d) in [(1900, 1, 30), (1900, 1, 1), (2100, 6, 1)] {
            assert_eq!(
                Err(ConversionError::SolarOutOfRange(solar(y, m, d))),
                cal.solar_to_lunar(solar(y, m, d)),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn to_solar() {
        use Month::*;
        let dataset = [
            ((1900, Common(1), 1), (1900, 1, 31)),
            ((1999, Common(11), 25), (2000, 1, 1)),
            ((2017, Common(1), 1), (2017, 1, 28)),
            ((2017, Common(6), 29), (2017, 7, 22)),
            ((2017, Leap(6), 1), (2017, 7, 23)),
            ((2017, Leap(6), 30), (2017, 8, 21)),
        ];
        let cal = TableCalendar;
        for ((ly, lm, ld), (sy, sm, sd)) in dataset {
            assert_eq!(
                Ok(solar(sy, sm, sd)),
                cal.lunar_to_solar(ly, lm, ld),
                "{ly} {lm:?} {ld}"
            );
        }
    }

    #[test]
    fn to_solar_errors() {
        use ConversionError::*;
        use Month::*;
        let cal = TableCalendar;
        let dataset = [
            ((1899, Common(1), 1), YearOutOfRange(1899)),
            ((2100, Common(1), 1), YearOutOfRange(2100)),
            ((2017, Common(13), 1), MonthOutOfRange(13)),
            ((2017, Common(0), 1), MonthOutOfRange(0)),
            (
                (2000, Leap(8), 1),
                NoSuchMonth {
                    year: 2000,
                    month: Leap(8),
                },
            ),
            (
                (2017, Leap(5), 1),
                NoSuchMonth {
                    year: 2017,
                    month: Leap(5),
                },
            ),
            (
                (2017, Common(6), 30),
                NoSuchDay {
                    year: 2017,
                    month: Common(6),
                    day: 30,
                },
            ),
            (
                (2017, Common(1), 0),
                NoSuchDay {
                    year: 2017,
                    month: Common(1),
                    day: 0,
                },
            ),
        ];
        for ((ly, lm, ld), std) in dataset {
            assert_eq!(Err(std), cal.lunar_to_solar(ly, lm, ld), "{ly} {lm:?} {ld}");
        }
    }

    #[test]
    fn round_trip() {
        let cal = TableCalendar;
        for (y, m, d) in [
            (1900, 1, 31),
            (1984, 10, 10),
            (2000, 1, 1),
            (2017, 7, 23),
            (2023, 4, 5),
            (2050, 12, 31),
            (2099, 1, 1),
        ] {
            let date = solar(y, m, d);
            let lunar = cal.solar_to_lunar(date).unwrap();
            assert_eq!(
                Ok(date),
                cal.lunar_to_solar(lunar.year, lunar.month, lunar.day),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn labels() {
        let cal = TableCalendar;
        let lunar = cal.solar_to_lunar(solar(2000, 1, 1)).unwrap();
        assert_eq!("冬月廿五", lunar.label());
        assert_eq!("农历1999年冬月廿五", lunar.cn());
        let lunar = cal.solar_to_lunar(solar(2017, 7, 23)).unwrap();
        assert_eq!("闰六月初一", lunar.label());
    }
}
