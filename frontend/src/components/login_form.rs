use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::session::Session;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub api: ApiClient,
    pub on_login: Callback<Session>,
}

/// Minimal credential form. On success the session is handed to the
/// application root; the form itself never stores anything.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let api = props.api.clone();
        let on_login = props.on_login.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let on_login = on_login.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                submitting.set(true);
                error.set(None);
                match api.login(&email_value, &password_value).await {
                    Ok((token, user)) => {
                        on_login.emit(Session {
                            token,
                            email: user.email,
                            is_admin: user.is_superuser,
                        });
                    }
                    Err(message) => {
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <h2>{"Logg inn"}</h2>

            if let Some(message) = &*error {
                <div class="error-msg">{ message }</div>
            }

            <form class="login-form" {onsubmit}>
                <div class="form-group">
                    <label for="email">{"E-post"}</label>
                    <input
                        type="email"
                        id="email"
                        value={(*email).clone()}
                        onchange={on_email_change}
                        disabled={*submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="password">{"Passord"}</label>
                    <input
                        type="password"
                        id="password"
                        value={(*password).clone()}
                        onchange={on_password_change}
                        disabled={*submitting}
                    />
                </div>
                <button type="submit" class="submit-btn" disabled={*submitting}>
                    { if *submitting { "Logger inn..." } else { "Logg inn" } }
                </button>
            </form>
        </div>
    }
}
