//! 农历年表数据，1900 至 2099 年。
//!
//! 每年以一个 `u32` 编码：第 4 至 15 位（自第 15 位起依次）标记正月至腊月
//! 是否为 30 天大月，最低 4 位为闰月月序（0 即无闰月），第 16 位标记闰月
//! 是否为大月。历元：公历 1900-01-31 即农历 1900 年正月初一。

use std::sync::OnceLock;

use crate::date::SolarDate;

use super::Month;

/// 年表首年。
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年。
pub const LAST_YEAR: i32 = 2099;

/// 公历 1900-01-31（农历 1900 年正月初一）的儒略日数。
const EPOCH_JDN: u32 = 2415051;

#[rustfmt::skip]
const YEAR_INFO: [u32; 200] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
];

/// 一农历年的年表信息。
#[derive(Debug, Copy, Clone)]
pub struct Year {
    year: i32,
    info: u32,
}

impl Year {
    /// 取得 `year` 年的年表信息，年表无该年则返回 `None`。
    pub fn get(year: i32) -> Option<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return None;
        }
        Some(Self {
            year,
            info: YEAR_INFO[(year - FIRST_YEAR) as usize],
        })
    }

    /// 年序号。
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 该年闰月月序，无闰月则为 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.info & 0xf {
            0 => None,
            m => Some(m),
        }
    }

    /// 平月 `month`（`1..=12`）的日数，29 或 30。
    ///
    /// # Panics
    ///
    /// 若月序号不在 `1..=12` 间则 panic。
    pub fn common_month_days(&self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        if self.info & (0x10000 >> month) != 0 { 30 } else { 29 }
    }

    /// 该年闰月的日数。仅当 [`leap_month`](Self::leap_month) 非 `None` 时有意义。
    pub fn leap_month_days(&self) -> u32 {
        if self.info & 0x10000 != 0 { 30 } else { 29 }
    }

    /// 该年总日数，353 至 385 天。
    pub fn total_days(&self) -> u32 {
        let mut days: u32 = (1..=12).map(|m| self.common_month_days(m)).sum();
        if self.leap_month().is_some() {
            days += self.leap_month_days();
        }
        days
    }

    /// 该年全部月份依历序排列，并附各月日数。闰月排在同序平月之后。
    pub fn months(&self) -> Vec<(Month, u32)> {
        let mut months = Vec::with_capacity(13);
        for m in 1..=12 {
            months.push((Month::Common(m), self.common_month_days(m)));
            if self.leap_month() == Some(m) {
                months.push((Month::Leap(m), self.leap_month_days()));
            }
        }
        months
    }

    /// 该年正月初一的公历日期。
    pub fn new_year(&self) -> SolarDate {
        SolarDate::from_jdn(EPOCH_JDN + year_starts()[(self.year - FIRST_YEAR) as usize])
    }
}

/// 依公历日期取得其所在农历年。
///
/// 日期在历元前或末年岁末后则返回 `None`。
pub fn year_for(date: SolarDate) -> Option<Year> {
    let offset = i64::from(date.jdn()) - i64::from(EPOCH_JDN);
    let starts = year_starts();
    if offset < 0 || offset >= i64::from(starts[200]) {
        return None;
    }
    let idx = starts.partition_point(|&s| i64::from(s) <= offset) - 1;
    Year::get(FIRST_YEAR + idx as i32)
}

/// 各年正月初一距历元的日数，末项为年表所覆盖时段的总日数。
fn year_starts() -> &'static [u32; 201] {
    static STARTS: OnceLock<[u32; 201]> = OnceLock::new();
    STARTS.get_or_init(|| {
        let mut starts = [0u32; 201];
        for i in 0..200 {
            let year = Year {
                year: FIRST_YEAR + i as i32,
                info: YEAR_INFO[i],
            };
            starts[i + 1] = starts[i] + year.total_days();
        }
        starts
    })
}
