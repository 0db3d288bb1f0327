use chrono::NaiveDateTime;
use shared::Selection;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingPanelProps {
    #[prop_or_default]
    pub selection: Option<Selection>,
    pub now: NaiveDateTime,
    pub hall: String,
    pub on_hall_change: Callback<String>,
    pub on_create: Callback<()>,
    pub on_delete: Callback<String>,
    pub creating: bool,
    pub is_admin: bool,
    /// Inline error from the last create/delete attempt
    #[prop_or_default]
    pub error: Option<String>,
}

/// Side panel next to the calendar: details for the selected slot, the hall
/// input, the create/delete actions and the colour legend. Create failures
/// show here verbatim and leave the selection alone so the user can retry.
#[function_component(BookingPanel)]
pub fn booking_panel(props: &BookingPanelProps) -> Html {
    let on_hall_input = {
        let on_hall_change = props.on_hall_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_hall_change.emit(input.value());
        })
    };

    let on_create = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };

    html! {
        <aside class="side-panel">
            <div class="selected-info">
                <h4>{"Valgt time"}</h4>
                {
                    if let Some(selection) = &props.selection {
                        html! {
                            <>
                                <div><strong>{"Dato: "}</strong>{ selection.date.to_string() }</div>
                                <div>
                                    <strong>{"Tid: "}</strong>
                                    { format!("{:02}:00 — {:02}:00", selection.hour, (selection.hour + 1) % 24) }
                                </div>
                                <div><strong>{"Status: "}</strong>{ selection.slot.state.label() }</div>
                            </>
                        }
                    } else {
                        html! { <div>{"Velg en tid i kalenderen"}</div> }
                    }
                }
            </div>

            <div class="hall-field">
                <label for="hall">{"Sal"}</label>
                <input
                    id="hall"
                    value={props.hall.clone()}
                    onchange={on_hall_input}
                />
            </div>

            if let Some(error) = &props.error {
                <div class="error-msg">{ error }</div>
            }

            { render_actions(props, on_create) }

            <div class="legend">
                <h4>{"Fargeforklaring"}</h4>
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
        </aside>
    }
}

fn render_actions(props: &BookingPanelProps, on_create: Callback<MouseEvent>) -> Html {
    let Some(selection) = &props.selection else {
        return html! {};
    };

    let booking_ids = selection.slot.state.booking_ids();
    if !booking_ids.is_empty() {
        return html! {
            <div class="slot-bookings">
                <div>{"Bookinger i denne timen:"}</div>
                <ul>
                    { for booking_ids.iter().map(|id| {
                        let on_delete = props.on_delete.clone();
                        let booking_id = id.clone();
                        html! {
                            <li key={id.clone()}>
                                <span class="booking-id">{ id }</span>
                                if props.is_admin {
                                    <button
                                        class="delete-btn"
                                        onclick={Callback::from(move |_: MouseEvent| on_delete.emit(booking_id.clone()))}
                                    >
                                        {"Slett"}
                                    </button>
                                }
                            </li>
                        }
                    }) }
                </ul>
            </div>
        };
    }

    let bookable = selection.is_bookable(props.now);
    html! {
        <div class="create-booking">
            <button
                class="submit-btn"
                disabled={props.creating || !bookable}
                onclick={on_create}
            >
                { if props.creating { "Oppretter..." } else { "Opprett booking (1t)" } }
            </button>
            if !bookable {
                <div class="hint">{"Denne timen kan ikke bookes."}</div>
            }
        </div>
    }
}
