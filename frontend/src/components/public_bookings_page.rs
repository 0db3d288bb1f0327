use yew::prelude::*;

use crate::components::week_calendar::WeekCalendar;
use crate::components::week_nav::{WeekNav, WeekNavProps};
use crate::hooks::use_week_schedule::use_week_schedule;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct PublicBookingsPageProps {
    pub api: ApiClient,
    pub on_login_click: Callback<MouseEvent>,
}

/// Read-only availability view for visitors who are not logged in. Same
/// week model as the booking page, but slots are not selectable.
#[function_component(PublicBookingsPage)]
pub fn public_bookings_page(props: &PublicBookingsPageProps) -> Html {
    let (schedule, actions) = use_week_schedule(&props.api);
    let now = date_utils::now_local();

    html! {
        <div class="bookings-container">
            <div class="page-title">
                <h2>{"Treningshaller"}</h2>
            </div>

            <WeekNav ..WeekNavProps::from_actions(schedule.week, &actions) />

            if schedule.loading {
                <div class="loading-state">{"Henter treningshaller..."}</div>
            }
            if let Some(error) = &schedule.error {
                <div class="error-msg">{ error }</div>
            }

            <div class="bookings-content">
                <WeekCalendar days={schedule.days.clone()} {now} />

                <aside class="side-panel">
                    <div class="info-card">
                        <h3>{"Informasjon"}</h3>
                        <p>{"Dette er en offentlig visning av tilgjengelige treningshaller."}</p>
                        <p>{"For å booke treningshall må du logge inn."}</p>
                    </div>
                    <div class="legend">
                        <h4>{"Status"}</h4>
                        <div class="legend-item">
                            <div class="legend-color available"></div><span>{"Ledig"}</span>
                        </div>
                        <div class="legend-item">
                            <div class="legend-color booked"></div><span>{"Opptatt"}</span>
                        </div>
                        <div class="legend-item">
                            <div class="legend-color blocked"></div><span>{"Blokkert"}</span>
                        </div>
                    </div>
                    <div class="cta-card">
                        <h4>{"Vil du booke treningshall?"}</h4>
                        <p>{"Logg inn for å få tilgang til booking-funksjoner."}</p>
                        <button class="btn btn-primary" onclick={props.on_login_click.clone()}>
                            {"Logg inn"}
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
