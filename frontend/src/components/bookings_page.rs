use shared::{CreateBookingRequest, Selection, DEFAULT_HALL};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::booking_panel::BookingPanel;
use crate::components::week_calendar::WeekCalendar;
use crate::components::week_nav::{WeekNav, WeekNavProps};
use crate::hooks::use_week_schedule::use_week_schedule;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct BookingsPageProps {
    pub api: ApiClient,
    pub is_admin: bool,
}

/// The authenticated booking calendar: week view plus the side panel for
/// creating and (for admins) deleting bookings.
#[function_component(BookingsPage)]
pub fn bookings_page(props: &BookingsPageProps) -> Html {
    let (schedule, actions) = use_week_schedule(&props.api);
    let selection = use_state(|| Option::<Selection>::None);
    let hall = use_state(|| DEFAULT_HALL.to_string());
    let submitting = use_state(|| false);
    let action_error = use_state(|| Option::<String>::None);

    // Week navigation clears the selection and any stale inline error
    use_effect_with(schedule.week, {
        let selection = selection.clone();
        let action_error = action_error.clone();
        move |_| {
            selection.set(None);
            action_error.set(None);
            || ()
        }
    });

    let now = date_utils::now_local();

    let on_select = {
        let selection = selection.clone();
        let action_error = action_error.clone();
        Callback::from(move |s: Selection| {
            selection.set(Some(s));
            action_error.set(None);
        })
    };

    let on_create = {
        let api = props.api.clone();
        let selection = selection.clone();
        let hall = hall.clone();
        let submitting = submitting.clone();
        let action_error = action_error.clone();
        let refresh = actions.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(current) = (*selection).clone() else {
                return;
            };
            let hall_name = if hall.trim().is_empty() {
                DEFAULT_HALL
            } else {
                hall.trim()
            };
            let Some(request) = CreateBookingRequest::for_slot(current.date, current.hour, hall_name)
            else {
                action_error.set(Some("Ugyldig time".to_string()));
                return;
            };

            let api = api.clone();
            let selection = selection.clone();
            let submitting = submitting.clone();
            let action_error = action_error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                submitting.set(true);
                action_error.set(None);
                match api.create_booking(&request).await {
                    Ok(_) => {
                        selection.set(None);
                        refresh.emit(());
                    }
                    Err(message) => {
                        // selection is kept so the user can retry
                        action_error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let api = props.api.clone();
        let selection = selection.clone();
        let action_error = action_error.clone();
        let refresh = actions.refresh.clone();
        Callback::from(move |booking_id: String| {
            let api = api.clone();
            let selection = selection.clone();
            let action_error = action_error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                action_error.set(None);
                match api.delete_booking(&booking_id).await {
                    Ok(()) => {
                        selection.set(None);
                        refresh.emit(());
                    }
                    Err(message) => {
                        // displayed status is untouched until a reload succeeds
                        action_error.set(Some(message));
                    }
                }
            });
        })
    };

    html! {
        <div class="bookings-container">
            <WeekNav ..WeekNavProps::from_actions(schedule.week, &actions) />

            if schedule.loading {
                <div class="loading-state">{"Henter uke..."}</div>
            }
            if let Some(error) = &schedule.error {
                <div class="error-msg">{ error }</div>
            }

            <div class="bookings-content">
                <WeekCalendar
                    days={schedule.days.clone()}
                    {now}
                    selected={(*selection).clone()}
                    on_select={Some(on_select)}
                />
                <BookingPanel
                    selection={(*selection).clone()}
                    {now}
                    hall={(*hall).clone()}
                    on_hall_change={Callback::from(move |value: String| hall.set(value))}
                    {on_create}
                    {on_delete}
                    creating={*submitting}
                    is_admin={props.is_admin}
                    error={(*action_error).clone()}
                />
            </div>
        </div>
    }
}
