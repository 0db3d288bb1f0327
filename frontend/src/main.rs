mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{BookingsPage, LoginForm, MyBookings, PublicBookingsPage};
use services::api::ApiClient;
use services::session::Session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Calendar,
    MyBookings,
    Login,
}

#[function_component(App)]
fn app() -> Html {
    let session = use_state(|| Option::<Session>::None);
    let view = use_state(|| View::Calendar);

    // The session token is threaded into the client here, at the root, and
    // nowhere else
    let api = ApiClient::new().with_token(session.as_ref().map(|s| s.token.clone()));

    let go_to = |target: View| {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(target))
    };

    let on_login = {
        let session = session.clone();
        let view = view.clone();
        Callback::from(move |new_session: Session| {
            session.set(Some(new_session));
            view.set(View::Calendar);
        })
    };

    let on_logout = {
        let session = session.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            session.set(None);
            view.set(View::Calendar);
        })
    };

    let content = match (*view, session.as_ref()) {
        (View::Login, _) | (View::MyBookings, None) => html! {
            <LoginForm api={ApiClient::new()} on_login={on_login} />
        },
        (View::Calendar, Some(current)) => html! {
            <BookingsPage api={api.clone()} is_admin={current.is_admin} />
        },
        (View::Calendar, None) => html! {
            <PublicBookingsPage api={api.clone()} on_login_click={go_to(View::Login)} />
        },
        (View::MyBookings, Some(_)) => html! {
            <MyBookings api={api.clone()} />
        },
    };

    html! {
        <>
            <nav class="navbar">
                <div class="navbar-brand" onclick={go_to(View::Calendar)}>
                    {"Hundeklubben"}
                </div>
                <div class="navbar-links">
                    <button class="nav-link" onclick={go_to(View::Calendar)}>
                        {"Treningshaller"}
                    </button>
                    if session.is_some() {
                        <button class="nav-link" onclick={go_to(View::MyBookings)}>
                            {"Mine bookinger"}
                        </button>
                        <span class="navbar-user">
                            { session.as_ref().map(|s| s.email.clone()).unwrap_or_default() }
                        </span>
                        <button class="nav-link" onclick={on_logout}>
                            {"Logg ut"}
                        </button>
                    } else {
                        <button class="nav-link" onclick={go_to(View::Login)}>
                            {"Logg inn"}
                        </button>
                    }
                </div>
            </nav>
            <main class="app-content">
                { content }
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
