use chrono::NaiveDate;
use futures::future::try_join_all;
use gloo::net::http::{Request, RequestBuilder};
use serde::{Deserialize, Serialize};
use shared::{
    build_week, sort_by_start, Booking, CalendarWeek, CreateBookingRequest, Day,
    DaySlotsResponse, MyBookingsResponse,
};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// API client for the booking backend. Carries the bearer token for the
/// current session, if any; unauthenticated clients still get the public
/// day view.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Caller profile from `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    pub fn with_token(self, token: Option<String>) -> Self {
        Self { token, ..self }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn day_url(&self, date: NaiveDate) -> String {
        format!("{}/bookings/{}", self.base_url, date.format("%Y-%m-%d"))
    }

    /// Fetch one day's slots.
    pub async fn fetch_day_slots(&self, date: NaiveDate) -> Result<DaySlotsResponse, String> {
        let response = self
            .authorized(Request::get(&self.day_url(date)))
            .send()
            .await
            .map_err(|e| format!("Kunne ikke hente {}: {}", date, e))?;
        if !response.ok() {
            return Err(format!("Kunne ikke hente {} ({})", date, response.status()));
        }
        response
            .json::<DaySlotsResponse>()
            .await
            .map_err(|e| format!("Ugyldig svar for {}: {}", date, e))
    }

    /// Fetch all seven days of a week in parallel and merge them in date
    /// order. One failed day fails the whole load; partial weeks are never
    /// returned.
    pub async fn fetch_week(&self, week: CalendarWeek) -> Result<Vec<Day>, String> {
        let dates = week.dates();
        let responses = try_join_all(dates.iter().map(|date| self.fetch_day_slots(*date))).await?;
        build_week(week, responses).map_err(|e| e.to_string())
    }

    pub async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, String> {
        let url = format!("{}/bookings", self.base_url);
        let response = self
            .authorized(Request::post(&url))
            .json(request)
            .map_err(|e| format!("Kunne ikke serialisere booking: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;
        if response.ok() {
            response
                .json::<Booking>()
                .await
                .map_err(|e| format!("Ugyldig svar: {}", e))
        } else {
            // The backend's message is shown to the user as-is
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Ukjent feil".to_string());
            Err(error_text)
        }
    }

    /// Admin-only; the backend enforces the role, the client just hides the
    /// control for everyone else.
    pub async fn delete_booking(&self, booking_id: &str) -> Result<(), String> {
        let url = format!("{}/bookings/{}", self.base_url, booking_id);
        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            if error_text.is_empty() {
                Err(format!("Sletting feilet ({})", response.status()))
            } else {
                Err(error_text)
            }
        }
    }

    /// The caller's own upcoming bookings, sorted by start time.
    pub async fn my_bookings(&self) -> Result<Vec<Booking>, String> {
        let url = format!("{}/users/me/bookings", self.base_url);
        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;
        if !response.ok() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Ukjent feil".to_string());
            return Err(error_text);
        }
        let data = response
            .json::<MyBookingsResponse>()
            .await
            .map_err(|e| format!("Ugyldig svar: {}", e))?;
        Ok(sort_by_start(data.bookings))
    }

    /// Log in and fetch the caller's profile. Anything beyond exchanging
    /// credentials for a token is the backend's concern.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, UserInfo), String> {
        let url = format!("{}/auth/login", self.base_url);
        let response = Request::post(&url)
            .json(&LoginRequest { email, password })
            .map_err(|e| format!("Kunne ikke serialisere: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;
        if !response.ok() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(if error_text.is_empty() {
                "Innlogging mislyktes. Sjekk at e-post og passord er riktig.".to_string()
            } else {
                error_text
            });
        }
        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| format!("Ugyldig svar: {}", e))?
            .access_token;
        let user = self
            .clone()
            .with_token(Some(token.clone()))
            .current_user()
            .await?;
        Ok((token, user))
    }

    async fn current_user(&self) -> Result<UserInfo, String> {
        let url = format!("{}/users/me", self.base_url);
        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;
        if !response.ok() {
            return Err(format!("Kunne ikke hente brukerinfo ({})", response.status()));
        }
        response
            .json::<UserInfo>()
            .await
            .map_err(|e| format!("Ugyldig svar: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_url_uses_iso_date() {
        let api = ApiClient::with_base_url("https://booking.example".to_string());
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(api.day_url(date), "https://booking.example/bookings/2024-06-05");
    }
}
