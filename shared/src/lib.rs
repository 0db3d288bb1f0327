use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hall name pre-filled in the booking form.
pub const DEFAULT_HALL: &str = "Hovedsal";

/// Slot status as reported by the backend. The client never derives this
/// itself; blocks (single-hour, full-day, recurring-weekday) and overlapping
/// bookings are resolved server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Blocked,
}

/// One hour slot as it appears on the wire in a day response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDto {
    /// Start hour of the slot (0-23); duration is fixed at one hour
    pub hour: u32,
    pub status: SlotStatus,
    /// Booking ids occupying this slot; more than one means overlapping
    /// bookings, which are shown as such
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_ids: Option<Vec<String>>,
    /// Admin-supplied reason, only meaningful for blocked slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response body for `GET /bookings/{date}`.
///
/// A missing `slots` field is treated as an empty day rather than a parse
/// failure, so one malformed day does not sink the whole week.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaySlotsResponse {
    #[serde(default)]
    pub slots: Vec<SlotDto>,
    /// Cosmetic legend mapping, only sent on some responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<HashMap<String, String>>,
}

/// Resolved state of a slot. Booked always carries at least one booking id
/// and blocked may carry a reason, so booked-without-ids or
/// available-with-ids cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotState {
    Available,
    Booked(Vec<String>),
    Blocked(Option<String>),
}

impl SlotState {
    pub fn is_available(&self) -> bool {
        matches!(self, SlotState::Available)
    }

    pub fn booking_ids(&self) -> &[String] {
        match self {
            SlotState::Booked(ids) => ids,
            _ => &[],
        }
    }

    /// CSS class used by both calendar views.
    pub fn css_class(&self) -> &'static str {
        match self {
            SlotState::Available => "available",
            SlotState::Booked(_) => "booked",
            SlotState::Blocked(_) => "blocked",
        }
    }

    /// Short status text shown in slot tooltips.
    pub fn label(&self) -> String {
        match self {
            SlotState::Available => "Ledig".to_string(),
            SlotState::Booked(ids) => format!("{} opptatt", ids.len()),
            SlotState::Blocked(Some(reason)) => format!("Blokkert: {}", reason),
            SlotState::Blocked(None) => "Blokkert".to_string(),
        }
    }
}

/// One bookable hour within a day.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub hour: u32,
    pub state: SlotState,
}

impl Slot {
    /// Resolve the wire representation into a [`SlotState`].
    ///
    /// A slot reported as booked with no booking ids is rendered as
    /// available, matching how the product has always treated it.
    pub fn from_dto(dto: SlotDto) -> Self {
        let state = match dto.status {
            SlotStatus::Booked => {
                let ids = dto.booking_ids.unwrap_or_default();
                if ids.is_empty() {
                    SlotState::Available
                } else {
                    SlotState::Booked(ids)
                }
            }
            SlotStatus::Blocked => SlotState::Blocked(dto.reason),
            SlotStatus::Available => SlotState::Available,
        };
        Slot {
            hour: dto.hour,
            state,
        }
    }

    /// Start of the slot on the given date. `None` for an out-of-range hour.
    pub fn starts_at(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        slot_start(date, self.hour)
    }

    /// A slot is in the past iff its start is strictly before `now`.
    /// Out-of-range hours never classify as past.
    pub fn is_past(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        match self.starts_at(date) {
            Some(start) => start < now,
            None => false,
        }
    }
}

/// Start timestamp for the one hour slot beginning at `hour` on `date`.
pub fn slot_start(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    Some(date.and_time(time))
}

/// One calendar day with its ordered slot list. Day lists are replaced
/// wholesale on every week load, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

impl Day {
    pub fn from_response(date: NaiveDate, response: DaySlotsResponse) -> Self {
        Day {
            date,
            slots: response.slots.into_iter().map(Slot::from_dto).collect(),
        }
    }
}

/// Errors from assembling a week out of per-day responses.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("forventet 7 dagssvar, fikk {0}")]
    WrongDayCount(usize),
}

/// Errors from parsing a `YYYY-Www` week input value.
#[derive(Debug, Error, PartialEq)]
pub enum WeekParseError {
    #[error("ugyldig ukeformat, forventet YYYY-Www")]
    InvalidFormat,
    #[error("uke {week} finnes ikke i {year}")]
    OutOfRange { year: i32, week: u32 },
}

/// A displayed week, anchored on its ISO Monday.
///
/// The anchor is always a Monday; every constructor and navigation step
/// renormalizes through [`CalendarWeek::containing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWeek {
    week_start: NaiveDate,
}

impl CalendarWeek {
    /// Week containing `date`: the Monday at or before it. Sunday maps to
    /// the Monday six days earlier, not the following one.
    pub fn containing(date: NaiveDate) -> Self {
        // Mon=0 .. Sun=6
        let offset = date.weekday().num_days_from_monday() as i64;
        CalendarWeek {
            week_start: date - Duration::days(offset),
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Sunday of the week.
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Duration::days(6)
    }

    pub fn previous(&self) -> Self {
        Self::containing(self.week_start - Duration::days(7))
    }

    pub fn next(&self) -> Self {
        Self::containing(self.week_start + Duration::days(7))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end()
    }

    /// The seven dates of the week in ascending order.
    pub fn dates(&self) -> [NaiveDate; 7] {
        let mut dates = [self.week_start; 7];
        for (i, slot) in dates.iter_mut().enumerate() {
            *slot = self.week_start + Duration::days(i as i64);
        }
        dates
    }

    pub fn week_number(&self) -> u32 {
        self.week_start.iso_week().week()
    }

    pub fn iso_year(&self) -> i32 {
        self.week_start.iso_week().year()
    }

    /// Value for an `<input type="week">` control, e.g. `2024-W23`.
    pub fn to_week_input(&self) -> String {
        format!("{}-W{:02}", self.iso_year(), self.week_number())
    }

    /// Parse an `<input type="week">` value back into a week.
    pub fn from_week_input(value: &str) -> Result<Self, WeekParseError> {
        let (year, week) = value
            .split_once("-W")
            .ok_or(WeekParseError::InvalidFormat)?;
        let year: i32 = year.parse().map_err(|_| WeekParseError::InvalidFormat)?;
        let week: u32 = week.parse().map_err(|_| WeekParseError::InvalidFormat)?;
        let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .ok_or(WeekParseError::OutOfRange { year, week })?;
        Ok(Self::containing(monday))
    }
}

/// Merge seven per-day responses into the week's day list.
///
/// Responses are matched to dates by index, so the result is ordered by
/// ascending date no matter what order the underlying fetches settled in.
pub fn build_week(
    week: CalendarWeek,
    responses: Vec<DaySlotsResponse>,
) -> Result<Vec<Day>, ScheduleError> {
    if responses.len() != 7 {
        return Err(ScheduleError::WrongDayCount(responses.len()));
    }
    Ok(week
        .dates()
        .iter()
        .zip(responses)
        .map(|(date, response)| Day::from_response(*date, response))
        .collect())
}

/// The slot a user has clicked. Lives only until a booking action, a new
/// click, or week navigation replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub date: NaiveDate,
    pub hour: u32,
    pub slot: Slot,
}

impl Selection {
    pub fn new(date: NaiveDate, slot: Slot) -> Self {
        Selection {
            date,
            hour: slot.hour,
            slot,
        }
    }

    /// A selection can turn into a new booking only while the slot is
    /// available and has not started yet. Past booked/blocked slots stay
    /// selectable for viewing and admin deletion.
    pub fn is_bookable(&self, now: NaiveDateTime) -> bool {
        self.slot.state.is_available() && !self.slot.is_past(self.date, now)
    }
}

/// A booking as returned by the backend. Ownership and conflict rules are
/// entirely backend-side; the client only creates, lists and deletes by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub hall: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Body for `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub hall: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl CreateBookingRequest {
    /// One hour booking starting at `date` + `hour`. Hour 23 ends at
    /// midnight on the following date. `None` for an out-of-range hour.
    pub fn for_slot(date: NaiveDate, hour: u32, hall: &str) -> Option<Self> {
        let start_time = slot_start(date, hour)?;
        Some(CreateBookingRequest {
            hall: hall.to_string(),
            start_time,
            end_time: start_time + Duration::hours(1),
        })
    }
}

/// Response body for `GET /users/me/bookings`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MyBookingsResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// Sort bookings chronologically for the overview list.
pub fn sort_by_start(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    bookings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_containing_returns_monday_for_every_weekday() {
        // 2024-06-03 is a Monday
        let monday = date(2024, 6, 3);
        for offset in 0..7 {
            let d = monday + Duration::days(offset);
            let week = CalendarWeek::containing(d);
            assert_eq!(week.week_start(), monday, "offset {}", offset);
            assert_eq!(week.week_start().weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn test_containing_sunday_maps_to_preceding_monday() {
        // Sunday must not jump forward to the next Monday
        let sunday = date(2024, 6, 9);
        assert_eq!(
            CalendarWeek::containing(sunday).week_start(),
            date(2024, 6, 3)
        );
    }

    #[test]
    fn test_containing_is_idempotent() {
        let week = CalendarWeek::containing(date(2024, 6, 7));
        assert_eq!(CalendarWeek::containing(week.week_start()), week);
    }

    #[test]
    fn test_week_start_bounds_the_date() {
        for d in [
            date(2024, 6, 3),
            date(2024, 6, 9),
            date(2024, 12, 31),
            date(2025, 1, 1),
            date(2024, 2, 29),
        ] {
            let start = CalendarWeek::containing(d).week_start();
            assert!(start <= d);
            assert!(d < start + Duration::days(7));
        }
    }

    #[test]
    fn test_week_navigation_round_trip() {
        let week = CalendarWeek::containing(date(2024, 6, 3));
        assert_eq!(week.next().previous(), week);
        assert_eq!(week.previous().next(), week);
        assert_eq!(week.next().week_start(), date(2024, 6, 10));
    }

    #[test]
    fn test_dates_are_seven_ascending_days() {
        let week = CalendarWeek::containing(date(2024, 6, 5));
        let dates = week.dates();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2024, 6, 3));
        assert_eq!(dates[6], date(2024, 6, 9));
        for pair in dates.windows(2) {
            assert_eq!(pair[1], pair[0] + Duration::days(1));
        }
    }

    #[test]
    fn test_week_end_and_contains() {
        let week = CalendarWeek::containing(date(2024, 6, 3));
        assert_eq!(week.week_end(), date(2024, 6, 9));
        assert!(week.contains(date(2024, 6, 3)));
        assert!(week.contains(date(2024, 6, 9)));
        assert!(!week.contains(date(2024, 6, 10)));
        assert!(!week.contains(date(2024, 6, 2)));
    }

    #[test]
    fn test_week_input_round_trip() {
        let week = CalendarWeek::containing(date(2024, 6, 3));
        assert_eq!(week.to_week_input(), "2024-W23");
        assert_eq!(CalendarWeek::from_week_input("2024-W23").unwrap(), week);
    }

    #[test]
    fn test_week_input_iso_year_differs_from_calendar_year() {
        // 2024-12-30 belongs to ISO week 1 of 2025
        let week = CalendarWeek::containing(date(2024, 12, 30));
        assert_eq!(week.to_week_input(), "2025-W01");
        assert_eq!(
            CalendarWeek::from_week_input("2025-W01").unwrap().week_start(),
            date(2024, 12, 30)
        );
    }

    #[test]
    fn test_week_input_rejects_garbage() {
        assert_eq!(
            CalendarWeek::from_week_input("2024"),
            Err(WeekParseError::InvalidFormat)
        );
        assert_eq!(
            CalendarWeek::from_week_input("abcd-Wxy"),
            Err(WeekParseError::InvalidFormat)
        );
        assert_eq!(
            CalendarWeek::from_week_input("2024-W60"),
            Err(WeekParseError::OutOfRange {
                year: 2024,
                week: 60
            })
        );
    }

    #[test]
    fn test_slot_status_wire_format_is_lowercase() {
        let dto: SlotDto =
            serde_json::from_str(r#"{"hour":18,"status":"available"}"#).unwrap();
        assert_eq!(dto.hour, 18);
        assert_eq!(dto.status, SlotStatus::Available);
        assert_eq!(dto.booking_ids, None);
        assert_eq!(dto.reason, None);
    }

    #[test]
    fn test_booked_slot_keeps_all_overlapping_ids() {
        let dto = SlotDto {
            hour: 10,
            status: SlotStatus::Booked,
            booking_ids: Some(vec!["b1".into(), "b2".into()]),
            reason: None,
        };
        let slot = Slot::from_dto(dto);
        assert_eq!(slot.state.booking_ids().to_vec(), vec!["b1", "b2"]);
        assert_eq!(slot.state.label(), "2 opptatt");
    }

    #[test]
    fn test_booked_without_ids_normalizes_to_available() {
        for booking_ids in [None, Some(vec![])] {
            let slot = Slot::from_dto(SlotDto {
                hour: 10,
                status: SlotStatus::Booked,
                booking_ids,
                reason: None,
            });
            assert!(slot.state.is_available());
            assert!(slot.state.booking_ids().is_empty());
        }
    }

    #[test]
    fn test_blocked_slot_with_and_without_reason() {
        let with_reason = Slot::from_dto(SlotDto {
            hour: 8,
            status: SlotStatus::Blocked,
            booking_ids: None,
            reason: Some("Vedlikehold".into()),
        });
        assert_eq!(with_reason.state, SlotState::Blocked(Some("Vedlikehold".into())));
        assert_eq!(with_reason.state.label(), "Blokkert: Vedlikehold");

        let without = Slot::from_dto(SlotDto {
            hour: 8,
            status: SlotStatus::Blocked,
            booking_ids: None,
            reason: None,
        });
        assert_eq!(without.state, SlotState::Blocked(None));
        assert_eq!(without.state.label(), "Blokkert");
        assert!(without.state.booking_ids().is_empty());
    }

    #[test]
    fn test_day_response_missing_slots_defaults_to_empty() {
        let response: DaySlotsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.slots.is_empty());
        let day = Day::from_response(date(2024, 6, 5), response);
        assert!(day.slots.is_empty());
    }

    #[test]
    fn test_build_week_orders_days_by_date_regardless_of_input_content() {
        let week = CalendarWeek::containing(date(2024, 6, 3));
        // Mark each response with a distinct hour so we can tell them apart
        let responses: Vec<DaySlotsResponse> = (0..7)
            .map(|i| DaySlotsResponse {
                slots: vec![SlotDto {
                    hour: 10 + i,
                    status: SlotStatus::Available,
                    booking_ids: None,
                    reason: None,
                }],
                colors: None,
            })
            .collect();
        let days = build_week(week, responses).unwrap();
        assert_eq!(days.len(), 7);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.date, date(2024, 6, 3) + Duration::days(i as i64));
            assert_eq!(day.slots[0].hour, 10 + i as u32);
        }
    }

    #[test]
    fn test_build_week_rejects_partial_weeks() {
        let week = CalendarWeek::containing(date(2024, 6, 3));
        let result = build_week(week, vec![DaySlotsResponse::default(); 5]);
        assert_eq!(result, Err(ScheduleError::WrongDayCount(5)));
    }

    #[test]
    fn test_past_classification_at_half_past_three() {
        let now = datetime(2024, 6, 10, 15, 30);
        let slot = |hour| Slot {
            hour,
            state: SlotState::Available,
        };
        assert!(slot(14).is_past(date(2024, 6, 10), now));
        // A slot that has already started counts as past
        assert!(slot(15).is_past(date(2024, 6, 10), now));
        assert!(!slot(16).is_past(date(2024, 6, 10), now));
        // Same hour the day before/after
        assert!(slot(16).is_past(date(2024, 6, 9), now));
        assert!(!slot(14).is_past(date(2024, 6, 11), now));
    }

    #[test]
    fn test_selection_bookable_only_for_future_available_slots() {
        let now = datetime(2024, 6, 10, 15, 30);
        let d = date(2024, 6, 10);
        let available = |hour| Selection::new(
            d,
            Slot {
                hour,
                state: SlotState::Available,
            },
        );
        assert!(available(16).is_bookable(now));
        assert!(!available(14).is_bookable(now));

        let booked = Selection::new(
            d,
            Slot {
                hour: 16,
                state: SlotState::Booked(vec!["b1".into()]),
            },
        );
        assert!(!booked.is_bookable(now));
    }

    #[test]
    fn test_create_request_spans_exactly_one_hour() {
        let request =
            CreateBookingRequest::for_slot(date(2024, 6, 5), 18, "Hovedsal").unwrap();
        assert_eq!(request.hall, "Hovedsal");
        assert_eq!(request.start_time, datetime(2024, 6, 5, 18, 0));
        assert_eq!(request.end_time, datetime(2024, 6, 5, 19, 0));
    }

    #[test]
    fn test_create_request_wire_timestamps() {
        let request =
            CreateBookingRequest::for_slot(date(2024, 6, 5), 18, "Hovedsal").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["hall"], "Hovedsal");
        assert_eq!(json["start_time"], "2024-06-05T18:00:00");
        assert_eq!(json["end_time"], "2024-06-05T19:00:00");
    }

    #[test]
    fn test_create_request_hour_23_rolls_into_next_day() {
        let request =
            CreateBookingRequest::for_slot(date(2024, 6, 5), 23, "Hovedsal").unwrap();
        assert_eq!(request.start_time, datetime(2024, 6, 5, 23, 0));
        assert_eq!(request.end_time, datetime(2024, 6, 6, 0, 0));
    }

    #[test]
    fn test_create_request_rejects_out_of_range_hour() {
        assert_eq!(CreateBookingRequest::for_slot(date(2024, 6, 5), 24, "Hovedsal"), None);
    }

    #[test]
    fn test_my_bookings_sorted_chronologically() {
        let booking = |id: &str, day, hour| Booking {
            id: id.to_string(),
            hall: DEFAULT_HALL.to_string(),
            start_time: datetime(2024, 6, day, hour, 0),
            end_time: datetime(2024, 6, day, hour + 1, 0),
        };
        let sorted = sort_by_start(vec![
            booking("c", 12, 10),
            booking("a", 10, 18),
            booking("b", 11, 9),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_my_bookings_response_missing_field_defaults() {
        let response: MyBookingsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.bookings.is_empty());
    }
}
