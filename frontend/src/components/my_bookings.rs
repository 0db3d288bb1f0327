use shared::Booking;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct MyBookingsProps {
    pub api: ApiClient,
}

/// The caller's own upcoming bookings, newest week first in the backend's
/// range, shown here sorted by start time.
#[function_component(MyBookings)]
pub fn my_bookings(props: &MyBookingsProps) -> Html {
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    use_effect_with(*reload, {
        let api = props.api.clone();
        let bookings = bookings.clone();
        let loading = loading.clone();
        let error = error.clone();
        move |_| {
            spawn_local(async move {
                loading.set(true);
                error.set(None);
                match api.my_bookings().await {
                    Ok(list) => bookings.set(list),
                    Err(message) => {
                        gloo::console::error!("Kunne ikke hente bookinger:", message.clone());
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
            || ()
        }
    });

    let retry = {
        let reload = reload.clone();
        let current = *reload;
        Callback::from(move |_: MouseEvent| reload.set(current.wrapping_add(1)))
    };

    html! {
        <div class="oversikt-container">
            <div class="section-header">
                <h2>{"Dine kommende bookinger"}</h2>
                <div class="booking-count">
                    { if *loading {
                        "...".to_string()
                    } else {
                        format!(
                            "{} {}",
                            bookings.len(),
                            if bookings.len() == 1 { "booking" } else { "bookinger" }
                        )
                    } }
                </div>
            </div>

            if *loading {
                <div class="loading-state">{"Henter dine bookinger..."}</div>
            }

            if let Some(message) = &*error {
                <div class="error-state">
                    <p>{ message }</p>
                    <button class="btn btn-outline" onclick={retry.clone()}>{"Prøv igjen"}</button>
                </div>
            }

            if !*loading && error.is_none() && bookings.is_empty() {
                <div class="empty-state">
                    <h3>{"Ingen kommende bookinger"}</h3>
                    <p>{"Du har ingen kommende bookinger. Gå til kalenderen for å opprette en ny booking."}</p>
                </div>
            }

            if !*loading && error.is_none() && !bookings.is_empty() {
                <div class="bookings-grid">
                    { for bookings.iter().map(render_booking) }
                </div>
            }
        </div>
    }
}

fn render_booking(booking: &Booking) -> Html {
    let start = booking.start_time;
    let end = booking.end_time;
    html! {
        <div class="booking-card" key={booking.id.clone()}>
            <div class="booking-header">
                <h4>{ &booking.hall }</h4>
                <span class="booking-status">{"Kommende"}</span>
            </div>
            <div class="booking-details">
                <div class="booking-date">{ date_utils::format_full_date(start.date()) }</div>
                <div class="booking-time">
                    { format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")) }
                </div>
            </div>
        </div>
    }
}
