//! JSON API：核心推算逻辑之上的薄 HTTP 适配层。

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Datelike;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::date::SolarDate;
use crate::lunar::{TableCalendar, table};
use crate::projector::{BirthdayProjection, project_birthdays};

/// 构造 API 路由。
pub fn router() -> Router {
    Router::new()
        .route("/api/convert", post(convert))
        .route("/api/test", get(health))
}

/// `POST /api/convert` 的请求体。
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// 公历出生日期，`YYYY-MM-DD`。
    pub birth_date: Option<String>,
    /// 推算年数，缺省 100。
    pub years_count: Option<i64>,
    /// 是否包含闰月生日，缺省包含。
    pub include_leap: Option<bool>,
}

/// 面向调用方的失败，响应体为 `{"error": …}`。
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ApiError {
    /// 输入有误，HTTP 400。
    BadRequest(String),
    /// 处理中的意外失败，HTTP 500。
    Internal(String),
}

impl ApiError {
    fn bad(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            Self::Internal(m) => {
                warn!("internal error: {m}");
                (StatusCode::INTERNAL_SERVER_ERROR, m)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "农历生日转换器API正常运行" }))
}

async fn convert(
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<BirthdayProjection>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        debug!("rejected request body: {e}");
        ApiError::bad("请求体格式错误")
    })?;
    let today = today().ok_or_else(|| ApiError::Internal("转换失败".to_owned()))?;
    handle_convert(req, today).map(Json)
}

/// 校验请求并调用推算。`today` 显式传入，处理本身不读环境。
fn handle_convert(req: ConvertRequest, today: SolarDate) -> Result<BirthdayProjection, ApiError> {
    let birth_date = req
        .birth_date
        .as_deref()
        .ok_or_else(|| ApiError::bad("请提供出生日期"))?;

    let parts: Vec<&str> = birth_date.split('-').collect();
    if parts.len() != 3 {
        return Err(ApiError::bad("日期格式错误，请使用 YYYY-MM-DD 格式"));
    }
    let nums = parts
        .iter()
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ApiError::bad("日期格式错误，请使用 YYYY-MM-DD 格式"))?;
    let (year, month, day) = (nums[0], nums[1], nums[2]);

    if !(table::FIRST_YEAR..=table::LAST_YEAR).contains(&year) {
        return Err(ApiError::bad("年份超出范围，请输入1900-2099之间的年份"));
    }

    let years_count = match req.years_count.unwrap_or(100) {
        n if n < 0 => return Err(ApiError::bad("年数不能为负数")),
        n => u32::try_from(n).unwrap_or(u32::MAX),
    };
    let include_leap = req.include_leap.unwrap_or(true);

    let birth = SolarDate::from_ymd(year, month, day)
        .ok_or_else(|| ApiError::bad("无法转换出生日期，请检查日期是否有效"))?;

    project_birthdays(&TableCalendar, birth, years_count, include_leap, today).map_err(|e| {
        debug!("birth date {birth} not convertible: {e}");
        ApiError::bad("无法转换出生日期，请检查日期是否有效")
    })
}

/// 当前本地日期，作为 `is_past` 的基准。
fn today() -> Option<SolarDate> {
    let now = chrono::Local::now().date_naive();
    SolarDate::from_ymd(now.year(), now.month() as i32, now.day() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(birth_date: Option<&str>, years_count: Option<i64>) -> ConvertRequest {
        ConvertRequest {
            birth_date: birth_date.map(str::to_owned),
            years_count,
            include_leap: None,
        }
    }

    fn run(req: ConvertRequest) -> Result<BirthdayProjection, ApiError> {
        handle_convert(req, SolarDate::from_ymd(2026, 8, 30).unwrap())
    }

    #[test]
    fn missing_birth_date() {
        assert_eq!(
            Err(ApiError::bad("请提供出生日期")),
            run(request(None, None))
        );
    }

    #[test]
    fn malformed_birth_date() {
        for bad in ["2000/01/01", "2000-01", "2000-01-01-01", "2000-ab-01", ""] {
            let err = run(request(Some(bad), None)).unwrap_err();
            assert_eq!(
                ApiError::bad("日期格式错误，请使用 YYYY-MM-DD 格式"),
                err,
                "{bad:?}"
            );
        }
    }

    #[test]
    fn year_out_of_epoch() {
        for bad in ["1899-06-01", "2100-01-01"] {
            let err = run(request(Some(bad), None)).unwrap_err();
            assert_eq!(
                ApiError::bad("年份超出范围，请输入1900-2099之间的年份"),
                err,
                "{bad}"
            );
        }
    }

    #[test]
    fn negative_years_count() {
        assert_eq!(
            Err(ApiError::bad("年数不能为负数")),
            run(request(Some("2000-01-01"), Some(-1)))
        );
    }

    #[test]
    fn invalid_calendar_date() {
        for bad in ["2001-02-29", "2000-13-01", "1900-01-15"] {
            let err = run(request(Some(bad), None)).unwrap_err();
            assert_eq!(
                ApiError::bad("无法转换出生日期，请检查日期是否有效"),
                err,
                "{bad}"
            );
        }
    }

    #[test]
    fn successful_conversion() {
        let p = run(request(Some("2000-01-01"), None)).unwrap();
        assert_eq!("农历1999年冬月廿五", p.birth_lunar);
        // 缺省推算 100 年，冬月廿五每年都有，另有若干闰月解
        assert!(p.results.len() >= 101, "{}", p.results.len());
        assert_eq!(0, p.results[0].age);
    }

    #[test]
    fn zero_years_count() {
        let p = run(request(Some("2000-01-01"), Some(0))).unwrap();
        assert_eq!(1, p.results.len());
    }
}
