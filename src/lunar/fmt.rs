//! 农历日期的中文名称表与格式化。

use super::Month;

/// 农历月名（不含「月」字），第 `m` 月为第 `m - 1` 项。十一、十二月称「冬月」「腊月」。
pub const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

/// 农历日名，初一至三十，第 `d` 日为第 `d - 1` 项。三十仅大月有效。
#[rustfmt::skip]
pub const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// 星期名，对应 ISO 星期序号 `1..=7`（周一至周日）。
pub const WEEKDAY_NAMES: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

/// 取得月名（含「月」字），闰月加「闰」字前缀。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{Month, fmt};
///
/// assert_eq!("冬月", fmt::month(Month::Common(11)));
/// assert_eq!("闰正月", fmt::month(Month::Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序号不在 `1..=12` 间则 panic。
pub fn month(m: Month) -> String {
    let num = m.num();
    assert!((1..=12).contains(&num), "month {} not in 1..=12", num);
    let prefix = if m.is_leap() { "闰" } else { "" };
    format!("{}{}月", prefix, MONTH_NAMES[(num - 1) as usize])
}

/// 取得日名。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("初十", fmt::day(10));
/// assert_eq!("廿五", fmt::day(25));
/// ```
///
/// # Panics
///
/// 若日序号不在 `1..=30` 间则 panic。
pub fn day(d: u32) -> &'static str {
    assert!((1..=30).contains(&d), "day {} not in 1..=30", d);
    DAY_NAMES[(d - 1) as usize]
}

/// 取得星期名，`dow` 为 ISO 星期序号。
///
/// # Panics
///
/// 若序号不在 `1..=7` 间则 panic。
pub fn weekday(dow: u32) -> &'static str {
    assert!((1..=7).contains(&dow), "weekday {} not in 1..=7", dow);
    WEEKDAY_NAMES[(dow - 1) as usize]
}
