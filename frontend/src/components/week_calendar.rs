use chrono::NaiveDateTime;
use shared::{Day, Selection, Slot};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct WeekCalendarProps {
    pub days: Vec<Day>,
    /// Render-time clock, used only to mark elapsed slots
    pub now: NaiveDateTime,
    #[prop_or_default]
    pub selected: Option<Selection>,
    /// Absent in the public read-only view
    #[prop_or_default]
    pub on_select: Option<Callback<Selection>>,
}

/// Seven day columns of hourly slots. Status comes verbatim from the
/// backend; the only client-side derivation is whether a slot has already
/// started, which disables booking but never hides the slot.
#[function_component(WeekCalendar)]
pub fn week_calendar(props: &WeekCalendarProps) -> Html {
    html! {
        <div class="calendar-week">
            { for props.days.iter().map(|day| render_day(props, day)) }
        </div>
    }
}

fn render_day(props: &WeekCalendarProps, day: &Day) -> Html {
    html! {
        <div class="day-column" key={day.date.to_string()}>
            <div class="day-header">
                <div class="day-name">{ date_utils::weekday_short(day.date) }</div>
                <div class="day-date">{ day.date.to_string() }</div>
            </div>
            <div class="day-slots">
                { for day.slots.iter().map(|slot| render_slot(props, day, slot)) }
            </div>
        </div>
    }
}

fn render_slot(props: &WeekCalendarProps, day: &Day, slot: &Slot) -> Html {
    let past = slot.is_past(day.date, props.now);
    let is_selected = props
        .selected
        .as_ref()
        .is_some_and(|s| s.date == day.date && s.hour == slot.hour);

    let mut class = classes!("slot-button", slot.state.css_class());
    if past {
        class.push("past");
    }
    if is_selected {
        class.push("selected");
    }

    // Elapsed available slots can no longer be booked; elapsed booked or
    // blocked slots stay clickable so admins can inspect and delete them.
    let disabled = props.on_select.is_none() || (past && slot.state.is_available());

    let onclick = props.on_select.clone().map(|on_select| {
        let selection = Selection::new(day.date, slot.clone());
        Callback::from(move |_: MouseEvent| on_select.emit(selection.clone()))
    });

    let booking_count = slot.state.booking_ids().len();

    html! {
        <button
            {class}
            {disabled}
            {onclick}
            key={slot.hour}
            title={slot.state.label()}
            aria-label={format!("{} {:02}:00", day.date, slot.hour)}
        >
            <span class="slot-hour">{ format!("{:02}:00", slot.hour) }</span>
            if booking_count > 0 {
                <span class="booking-count">{ booking_count }</span>
            }
        </button>
    }
}
