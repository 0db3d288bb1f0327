use shared::CalendarWeek;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_week_schedule::WeekScheduleActions;

#[derive(Properties, PartialEq)]
pub struct WeekNavProps {
    pub week: CalendarWeek,
    pub prev_week: Callback<MouseEvent>,
    pub next_week: Callback<MouseEvent>,
    pub go_to_today: Callback<MouseEvent>,
    pub set_week: Callback<CalendarWeek>,
}

impl WeekNavProps {
    pub fn from_actions(week: CalendarWeek, actions: &WeekScheduleActions) -> Self {
        Self {
            week,
            prev_week: actions.prev_week.clone(),
            next_week: actions.next_week.clone(),
            go_to_today: actions.go_to_today.clone(),
            set_week: actions.set_week.clone(),
        }
    }
}

/// Week navigation header shared by the public and authenticated calendars:
/// previous/next arrows, a jump-to-today button, a `type="week"` picker and
/// the displayed date range.
#[function_component(WeekNav)]
pub fn week_nav(props: &WeekNavProps) -> Html {
    let on_week_input = {
        let set_week = props.set_week.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match CalendarWeek::from_week_input(&input.value()) {
                Ok(week) => set_week.emit(week),
                Err(err) => {
                    gloo::console::warn!("Ugyldig ukeverdi:", err.to_string());
                }
            }
        })
    };

    html! {
        <div class="bookings-header">
            <div class="week-navigation">
                <button class="nav-btn" onclick={props.prev_week.clone()} title="Forrige uke">
                    {"←"}
                </button>
                <button class="nav-btn" onclick={props.next_week.clone()} title="Neste uke">
                    {"→"}
                </button>
                <button class="today-btn" onclick={props.go_to_today.clone()} title="Gå til denne uken">
                    {"I dag"}
                </button>
                <input
                    type="week"
                    class="week-input"
                    value={props.week.to_week_input()}
                    onchange={on_week_input}
                />
            </div>
            <div class="week-info">
                <span class="week-number">{format!("Uke {}", props.week.week_number())}</span>
                <span class="week-range">
                    {format!("{} — {}", props.week.week_start(), props.week.week_end())}
                </span>
            </div>
        </div>
    }
}
