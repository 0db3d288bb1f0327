use shared::{CalendarWeek, Day};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;

/// Snapshot of the week view for rendering.
#[derive(Clone, PartialEq)]
pub struct WeekScheduleState {
    pub week: CalendarWeek,
    pub days: Vec<Day>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct WeekScheduleActions {
    pub prev_week: Callback<MouseEvent>,
    pub next_week: Callback<MouseEvent>,
    pub go_to_today: Callback<MouseEvent>,
    pub set_week: Callback<CalendarWeek>,
    pub refresh: Callback<()>,
}

/// Week schedule loading and navigation.
///
/// The seven day fetches run in parallel and settle together; one failed
/// day fails the whole load and the previously displayed days stay on
/// screen with an error banner. Every load is tagged with a generation
/// counter so a response that arrives after further navigation is dropped
/// instead of flickering the view back to a stale week.
#[hook]
pub fn use_week_schedule(api: &ApiClient) -> (WeekScheduleState, WeekScheduleActions) {
    let week = use_state(|| CalendarWeek::containing(date_utils::today()));
    let days = use_state(Vec::<Day>::new);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let reload_tick = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u64);

    use_effect_with((*week, *reload_tick), {
        let api = api.clone();
        let days = days.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.clone();
        move |(requested, _): &(CalendarWeek, u32)| {
            let requested = *requested;
            *generation.borrow_mut() += 1;
            let this_load = *generation.borrow();
            loading.set(true);
            spawn_local(async move {
                let result = api.fetch_week(requested).await;
                if *generation.borrow() != this_load {
                    gloo::console::debug!(
                        "Dropper utdatert ukesvar for",
                        requested.to_week_input()
                    );
                    return;
                }
                match result {
                    Ok(new_days) => {
                        days.set(new_days);
                        error.set(None);
                    }
                    Err(message) => {
                        gloo::console::error!("Ukelasting feilet:", message.clone());
                        // previous days stay visible under the banner
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
            || ()
        }
    });

    let prev_week = {
        let week_handle = week.clone();
        use_callback(*week, move |_: MouseEvent, current: &CalendarWeek| {
            week_handle.set(current.previous())
        })
    };

    let next_week = {
        let week_handle = week.clone();
        use_callback(*week, move |_: MouseEvent, current: &CalendarWeek| {
            week_handle.set(current.next())
        })
    };

    let go_to_today = {
        let week_handle = week.clone();
        use_callback((), move |_: MouseEvent, _| {
            week_handle.set(CalendarWeek::containing(date_utils::today()))
        })
    };

    let set_week = {
        let week_handle = week.clone();
        use_callback((), move |target: CalendarWeek, _| week_handle.set(target))
    };

    let refresh = {
        let reload_tick_handle = reload_tick.clone();
        use_callback(*reload_tick, move |_: (), tick: &u32| {
            reload_tick_handle.set(tick.wrapping_add(1))
        })
    };

    let state = WeekScheduleState {
        week: *week,
        days: (*days).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = WeekScheduleActions {
        prev_week,
        next_week,
        go_to_today,
        set_week,
        refresh,
    };

    (state, actions)
}
