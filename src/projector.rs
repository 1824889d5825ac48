//! 农历生日推算：自公历出生日期推出农历锚点，再逐年映射回公历。

use serde::Serialize;

use crate::date::SolarDate;
use crate::lunar::{ConversionError, LunarCalendar, Month, fmt};

/// 一次农历生日的公历对应（一条推算结果）。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Occurrence {
    /// 农历年。
    pub lunar_year: i32,
    /// 农历月日文本，如「冬月廿五」「闰六月初一」。
    pub lunar_date: String,
    /// 公历日期文本，如「2000年01月01日」。
    pub solar_date: String,
    pub solar_year: i32,
    pub solar_month: i32,
    pub solar_day: i32,
    /// 星期名，「周一」至「周日」。
    pub weekday: String,
    /// 周岁，出生当年为 0。
    pub age: u32,
    /// 虚岁，周岁加一。
    pub age_xu: u32,
    /// 是否为闰月生日。
    pub is_leap_birthday: bool,
    /// 该日是否早于推算基准日。
    pub is_past: bool,
}

/// 完整的推算结果：出生日期的双历摘要加按公历日期升序的逐年结果。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BirthdayProjection {
    /// 出生公历日期文本。
    pub birth_solar: String,
    /// 出生农历日期文本。
    pub birth_lunar: String,
    /// 锚点月序号。
    pub lunar_month: u32,
    /// 锚点日序号。
    pub lunar_day: u32,
    pub lunar_month_name: String,
    pub lunar_day_name: String,
    /// 出生日期本身是否在闰月。
    pub is_birth_leap: bool,
    pub results: Vec<Occurrence>,
}

/// 推算自出生年起 `years_count + 1` 个农历年中农历生日对应的公历日期。
///
/// 锚点月日取出生日期的月序号与日序号；出生在闰月只记录在
/// [`is_birth_leap`](BirthdayProjection::is_birth_leap)，不影响锚点。每个农历年
/// 先尝试平月解，`include_leap` 时再尝试同序闰月解；某年无此日（或无此闰月）
/// 则该次尝试静默跳过，不是错误。结果按公历日期升序排列。
///
/// `today` 为显式传入的基准日，仅用于 `is_past`；给定同一基准日，输出完全确定。
///
/// 仅出生日期本身无法转换时整体失败。
///
/// # 用例
///
/// ```
/// use nongli::lunar::TableCalendar;
/// use nongli::{SolarDate, project_birthdays};
///
/// let birth = SolarDate::from_ymd(2000, 1, 1).unwrap();
/// let today = SolarDate::from_ymd(2026, 8, 30).unwrap();
/// let projection = project_birthdays(&TableCalendar, birth, 0, true, today).unwrap();
///
/// assert_eq!("农历1999年冬月廿五", projection.birth_lunar);
/// assert_eq!(1, projection.results.len());
/// assert_eq!(0, projection.results[0].age);
/// assert_eq!(1, projection.results[0].age_xu);
/// ```
pub fn project_birthdays<C: LunarCalendar>(
    calendar: &C,
    birth: SolarDate,
    years_count: u32,
    include_leap: bool,
    today: SolarDate,
) -> Result<BirthdayProjection, ConversionError> {
    let birth_lunar = calendar.solar_to_lunar(birth)?;
    let anchor_month = birth_lunar.month.num();
    let anchor_day = birth_lunar.day;

    // 年表至多覆盖 200 年，容量按此封顶即可
    let mut results = Vec::with_capacity(years_count.saturating_add(1).min(201) as usize);
    'years: for offset in 0..=years_count {
        let lunar_year = birth_lunar.year + offset as i32;
        let attempts = [Month::Common(anchor_month)]
            .into_iter()
            .chain(include_leap.then_some(Month::Leap(anchor_month)));
        for month in attempts {
            match calendar.lunar_to_solar(lunar_year, month, anchor_day) {
                Ok(date) => results.push(occurrence(lunar_year, month, anchor_day, date, offset, today)),
                // 后续年份全在历表外，提前结束
                Err(ConversionError::YearOutOfRange(_)) => break 'years,
                // 该年无此日或无此闰月，正常跳过
                Err(_) => {}
            }
        }
    }
    results.sort_by_key(|o| (o.solar_year, o.solar_month, o.solar_day));

    Ok(BirthdayProjection {
        birth_solar: birth.cn(),
        birth_lunar: birth_lunar.cn(),
        lunar_month: anchor_month,
        lunar_day: anchor_day,
        lunar_month_name: birth_lunar.month.name(),
        lunar_day_name: fmt::day(anchor_day).to_owned(),
        is_birth_leap: birth_lunar.month.is_leap(),
        results,
    })
}

fn occurrence(
    lunar_year: i32,
    month: Month,
    day: u32,
    date: SolarDate,
    offset: u32,
    today: SolarDate,
) -> Occurrence {
    let (solar_year, solar_month, solar_day) = date.ymd();
    Occurrence {
        lunar_year,
        lunar_date: month.name() + fmt::day(day),
        solar_date: date.cn(),
        solar_year,
        solar_month,
        solar_day,
        weekday: fmt::weekday(date.day_of_week()).to_owned(),
        age: offset,
        age_xu: offset + 1,
        is_leap_birthday: month.is_leap(),
        is_past: date < today,
    }
}
