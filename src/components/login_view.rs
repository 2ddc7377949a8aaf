use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginViewProps {
    /// Fired once the backend accepts the credentials (the auth cookie is
    /// set by the response).
    pub on_login: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let mobile = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_mobile = {
        let mobile = mobile.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            mobile.set(e.target_unchecked_into::<HtmlInputElement>().value());
            error.set(None);
        })
    };
    let on_password = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
            error.set(None);
        })
    };

    let onsubmit = {
        let mobile = mobile.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mobile = mobile.clone();
            let password = password.clone();
            let loading = loading.clone();
            let error = error.clone();
            let on_login = on_login.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match api::login(&mobile, &password).await {
                    Ok(()) => {
                        log::info!("agent logged in");
                        loading.set(false);
                        on_login.emit(());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        loading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let input_style =
        "width:100%; padding:12px; border:1px solid #d1d5db; border-radius:8px; font-size:14px; box-sizing:border-box;";
    let label_style =
        "display:block; font-size:14px; font-weight:500; color:#374151; margin-bottom:8px;";

    html! {
        <div style="min-height:100vh; background:#f9fafb; display:flex; flex-direction:column; justify-content:center;">
            <div style="max-width:448px; width:100%; margin:0 auto; padding:24px; box-sizing:border-box;">
                <div style="background:#fff; border-radius:12px; box-shadow:0 10px 15px rgba(0,0,0,0.1); padding:32px;">
                    <div style="text-align:center; margin-bottom:32px;">
                        <h2 style="margin:0; font-size:24px; font-weight:700; color:#1f2937;">{"Agent Login"}</h2>
                    </div>
                    <form {onsubmit} style="display:flex; flex-direction:column; gap:24px;">
                        <div>
                            <label for="mobile" style={label_style}>{"Mobile Number"}</label>
                            <input
                                type="tel"
                                id="mobile"
                                value={(*mobile).clone()}
                                oninput={on_mobile}
                                style={input_style}
                            />
                        </div>
                        <div>
                            <label for="password" style={label_style}>{"Password"}</label>
                            <input
                                type="password"
                                id="password"
                                value={(*password).clone()}
                                oninput={on_password}
                                style={input_style}
                            />
                        </div>
                        if let Some(text) = &*error {
                            <p style="margin:0; color:#ef4444; font-size:13px;">{ text.clone() }</p>
                        }
                        <button
                            type="submit"
                            disabled={*loading}
                            style="width:100%; padding:12px; border:none; border-radius:9999px; background:#fcd34d; font-size:15px; font-weight:500; cursor:pointer;"
                        >
                            { if *loading { "Signing in..." } else { "Sign in" } }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
