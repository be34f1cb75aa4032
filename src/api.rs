use anyhow::anyhow;
use chrono::NaiveDateTime;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

pub fn auth_headers(token: &str) -> Result<HeaderMap, anyhow::Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(format!("Bearer {}", token).as_str())
            .map_err(|_| anyhow!("failed to build authorization header"))?,
    );

    Ok(headers)
}

// Session datetimes come back in ISO format, optionally with fractional
// seconds. Datetime-local inputs produce the minute-precision variant.
// Unparseable values are shown as-is.
pub fn format_datetime(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EventSession {
    pub session_id: i32,
    pub start_datetime: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub max_participants: Option<i32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EventPhoto {
    #[serde(default)]
    pub photo_id: i32,
    pub photo_url: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Excursion {
    pub event_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub format_type: Option<String>,
    #[serde(default)]
    pub age_category: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub conducted_by: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub vk: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photos: Vec<EventPhoto>,
    #[serde(default)]
    pub sessions: Vec<EventSession>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExcursionsResponse {
    pub excursions: Vec<Excursion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExcursionResponse {
    pub excursion: Excursion,
}

#[derive(Clone, Debug, Serialize)]
pub struct SessionDraft {
    pub start_datetime: String,
    pub max_participants: i32,
    pub cost: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ExcursionDraft {
    pub title: String,
    pub description: String,
    pub place: String,
    pub category: String,
    pub format_type: String,
    pub age_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conducted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<SessionDraft>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExcursionCreated {
    pub message: String,
    #[serde(default)]
    pub event_id: Option<i32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewsItem {
    pub news_id: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub photo_author: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReservationRequest {
    pub session_id: i32,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub participants_count: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReservationCreated {
    pub message: String,
    #[serde(default)]
    pub reservation_id: Option<i32>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub payment_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Reservation {
    pub reservation_id: i32,
    #[serde(default)]
    pub session_id: Option<i32>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub participants_count: i32,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReservationsResponse {
    pub reservations: Vec<Reservation>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CancelRequest {
    pub reservation_id: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CalendarLink {
    pub google_calendar_link: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub user_id: i32,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PopularExcursion {
    pub title: String,
    pub total_participants: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnalyticsDetail {
    pub excursion_id: i32,
    pub title: String,
    pub session_count: i32,
    pub total_participants: i32,
}

// The backend answers with a short {"message", "stats"} shape while a
// resident has no excursions, all counters default to empty in that case.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub total_excursions: i32,
    #[serde(default)]
    pub total_visitors: i32,
    #[serde(default)]
    pub most_popular_excursion: Option<PopularExcursion>,
    #[serde(default)]
    pub details: Vec<AnalyticsDetail>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AgeCategoryRef {
    pub age_category_id: i32,
    pub age_category_name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FormatTypeRef {
    pub format_type_id: i32,
    pub format_type_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_backend_payload() {
        let payload = r#"{
            "access_token": "header.claims.signature",
            "role": "resident",
            "message": "Добро пожаловать, Анна!"
        }"#;

        let res: LoginResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(res.access_token, "header.claims.signature");
        assert_eq!(res.role, "resident");
        assert!(res.message.starts_with("Добро пожаловать"));
    }

    #[test]
    fn excursion_parses_with_missing_optional_fields() {
        let payload = r#"{
            "event_id": 12,
            "title": "Вечерняя экскурсия",
            "place": "Главный корпус",
            "sessions": [
                {"session_id": 3, "start_datetime": "2025-07-01T18:00:00", "cost": 450.0, "max_participants": 20}
            ]
        }"#;

        let excursion: Excursion = serde_json::from_str(payload).unwrap();

        assert_eq!(excursion.event_id, 12);
        assert_eq!(excursion.sessions.len(), 1);
        assert_eq!(excursion.sessions[0].cost, 450.0);
        assert!(excursion.description.is_none());
        assert!(excursion.photos.is_empty());
    }

    #[test]
    fn reservation_created_covers_free_and_paid_shapes() {
        let free: ReservationCreated =
            serde_json::from_str(r#"{"message": "Бронирование успешно создано (бесплатно)", "reservation_id": 41}"#)
                .unwrap();
        let paid: ReservationCreated = serde_json::from_str(
            r#"{"message": "Перейдите по ссылке для оплаты", "payment_id": "2f2c5e7b", "payment_url": "https://yookassa.ru/checkout/2f2c5e7b"}"#,
        )
        .unwrap();

        assert_eq!(free.reservation_id, Some(41));
        assert!(free.payment_url.is_none());
        assert_eq!(paid.payment_id.as_deref(), Some("2f2c5e7b"));
        assert!(paid.reservation_id.is_none());
    }

    #[test]
    fn analytics_tolerates_the_empty_shape() {
        let empty: Analytics =
            serde_json::from_str(r#"{"message": "У вас пока нет экскурсий", "stats": []}"#)
                .unwrap();
        let full: Analytics = serde_json::from_str(
            r#"{
                "total_excursions": 2,
                "total_visitors": 48,
                "most_popular_excursion": {"title": "Гончарная мастерская", "total_participants": 30},
                "details": [
                    {"excursion_id": 5, "title": "Гончарная мастерская", "session_count": 4, "total_participants": 30}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(empty.total_excursions, 0);
        assert!(empty.details.is_empty());
        assert_eq!(full.details.len(), 1);
        assert_eq!(full.most_popular_excursion.unwrap().total_participants, 30);
    }

    #[test]
    fn datetimes_render_in_local_notation() {
        assert_eq!(format_datetime("2025-07-01T18:00:00"), "01.07.2025 18:00");
        assert_eq!(
            format_datetime("2025-07-01T18:00:00.123456"),
            "01.07.2025 18:00"
        );
        assert_eq!(format_datetime("2025-07-01T18:00"), "01.07.2025 18:00");
        assert_eq!(format_datetime("завтра"), "завтра");
    }
}
