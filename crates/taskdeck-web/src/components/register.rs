use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::{Callback, Html, MouseEvent, Properties, TargetCast, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub busy: bool,
    pub error: Option<String>,
    pub on_submit: Callback<(String, String)>,
    pub on_show_login: Callback<MouseEvent>,
}

#[function_component(Register)]
pub fn register(props: &RegisterProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="onboarding">
            <div class="brand">
                <h1>{ "Task Manager" }</h1>
                <p>{ "Organize Tomorrow, Today." }</p>
            </div>

            <div class="panel auth">
                <h2>{ "Join Task Manager" }</h2>
                <h3>{ "Start managing your tasks and stay organized." }</h3>
                {
                    if let Some(error) = props.error.clone() {
                        html! { <div class="form-error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                <form {onsubmit}>
                    <label for="username">{ "Username" }</label>
                    <input
                        id="username"
                        type="text"
                        required={true}
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username_input}
                    />
                    <label for="password">{ "Password" }</label>
                    <input
                        id="password"
                        type="password"
                        required={true}
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    <button type="submit" class="btn primary" disabled={props.busy}>
                        { if props.busy { "Registering..." } else { "Register" } }
                    </button>
                    <button type="button" class="btn" onclick={props.on_show_login.clone()}>
                        { "Sign In Instead" }
                    </button>
                </form>
            </div>
        </div>
    }
}
