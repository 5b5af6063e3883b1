use log::info;
use stylist::yew::styled_component;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::prelude::*;

use crate::config::AffiliateConfig;
use crate::lead::browser::{alert_user, DocumentCookies, VercelAnalytics, WindowNavigator};
use crate::lead::location::{fetch_location, schedule_lookup, ResolvedLocation};
use crate::lead::redirect::submit_zip;
use crate::lead::zip::{accept_zip_keystroke, FormState, HEADING};

#[styled_component]
pub fn LeadCaptureHero() -> Html {
    let zip_code = use_state(String::new);
    let city_name = use_state(String::new);
    let state = use_state(String::new);
    let is_loading_location = use_state(|| false);

    // Personalize once, after first paint
    {
        let zip_code = zip_code.clone();
        let city_name = city_name.clone();
        let state = state.clone();
        let is_loading_location = is_loading_location.clone();
        use_effect_with_deps(
            move |_| {
                let scheduled = schedule_lookup(move || {
                    is_loading_location.set(true);
                    spawn_local(async move {
                        let resolved = ResolvedLocation::from_lookup(fetch_location().await);
                        if resolved.is_known() {
                            info!("Visitor located in {}, {}", resolved.city_name, resolved.state);
                        }
                        // Overwrites whatever was typed meanwhile.
                        city_name.set(resolved.city_name);
                        zip_code.set(resolved.zip_code);
                        state.set(resolved.state);
                        is_loading_location.set(false);
                    });
                });
                move || drop(scheduled)
            },
            (),
        );
    }

    let form = FormState {
        zip_code: (*zip_code).clone(),
        city_name: (*city_name).clone(),
        state: (*state).clone(),
        is_loading_location: *is_loading_location,
    };
    let can_continue = form.can_continue();

    let on_continue = {
        let zip_code = zip_code.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let result = submit_zip(
                &AffiliateConfig::default(),
                &zip_code,
                &state,
                &DocumentCookies,
                &VercelAnalytics,
                &WindowNavigator,
            );
            if let Err(e) = result {
                alert_user(&e.to_string());
            }
        })
    };

    let on_zip_input = {
        let zip_code = zip_code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match accept_zip_keystroke(&input.value()) {
                Some(value) => zip_code.set(value),
                None => input.set_value(&zip_code),
            }
        })
    };

    let on_zip_keypress = {
        let on_continue = on_continue.clone();
        let form = form.clone();
        Callback::from(move |e: KeyboardEvent| {
            if form.should_submit_on_key(&e.key()) {
                on_continue.emit(());
            }
        })
    };

    let on_click = {
        let on_continue = on_continue.clone();
        let submit_on_click = form.should_submit_on_click();
        Callback::from(move |_: MouseEvent| {
            if submit_on_click {
                on_continue.emit(());
            }
        })
    };

    let section = css!(
        r#"
        width: 100%;
        display: flex;
        flex-direction: column;
        position: relative;
        background: linear-gradient(to bottom, #E8F4FC, #FFFFFF);

        @media (min-width: 1024px) {
            padding: 5rem 0;
        }
        "#
    );

    let layout = css!(
        r#"
        max-width: 80rem;
        margin: 0 auto;
        padding: 3rem 1rem;
        display: flex;
        flex-direction: column-reverse;
        gap: 2rem;

        @media (min-width: 1024px) {
            flex-direction: row;
            justify-content: space-between;
            align-items: center;
            gap: 3rem;
        }
        "#
    );

    let heading = css!(
        r#"
        font-size: 32px;
        font-weight: 800;
        color: #1f2937;
        line-height: 1.25;
        text-align: center;

        span {
            color: #3498DB;
        }

        @media (min-width: 1024px) {
            font-size: 48px;
            text-align: left;
        }

        @media (min-width: 1280px) {
            font-size: 64px;
        }
        "#
    );

    let zip_row = css!(
        r#"
        display: flex;
        flex-direction: column;
        gap: 0.75rem;

        @media (min-width: 640px) {
            flex-direction: row;
        }

        .zip-field {
            position: relative;
            flex: 1;
        }

        .zip-pin {
            position: absolute;
            left: 1rem;
            top: 50%;
            transform: translateY(-50%);
            color: #16a34a;
        }

        input {
            width: 100%;
            padding: 1rem 1rem 1rem 3rem;
            font-size: 18px;
            font-weight: 600;
            color: #111827;
            border: 1px solid #d1d5db;
            border-radius: 0.5rem;
            background: white;
        }

        input:disabled {
            opacity: 0.5;
            cursor: not-allowed;
        }

        button {
            padding: 1rem 1.5rem;
            border: none;
            border-radius: 0.5rem;
            font-size: 18px;
            font-weight: 600;
            color: white;
            white-space: nowrap;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            background: #3498DB;
            cursor: pointer;
        }

        button:hover {
            background: #3476DB;
        }

        button:disabled {
            background: #9ca3af;
            cursor: not-allowed;
        }

        .spinner {
            width: 1rem;
            height: 1rem;
            border: 2px solid white;
            border-top-color: transparent;
            border-radius: 50%;
            animation: hero-spin 1s linear infinite;
        }
        "#
    );

    html! {
        <div class={section}>
            <style>
                {r#"
                @keyframes hero-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
            <div class={layout}>
                <div class="hero-content">
                    <h1 class={heading} aria-label={form.heading()}>
                        {HEADING}
                        if !form.city_name.is_empty() {
                            {" in "}<span>{form.city_name.clone()}</span>
                        }
                    </h1>
                    <p class="hero-subheading">
                        {"Compare top providers in minutes and start saving today."}
                    </p>

                    <div class={zip_row}>
                        <div class="zip-field">
                            <span class="zip-pin" aria-hidden="true">{"📍"}</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                maxlength="5"
                                placeholder={form.zip_placeholder()}
                                value={form.zip_code.clone()}
                                oninput={on_zip_input}
                                onkeypress={on_zip_keypress}
                                disabled={form.is_loading_location}
                            />
                        </div>
                        <button onclick={on_click} disabled={!can_continue}>
                            if form.is_loading_location {
                                <div class="spinner"></div>
                                {form.continue_label()}
                            } else {
                                <span>{form.continue_label()}</span>
                                <span class="arrow">{"→"}</span>
                            }
                        </button>
                    </div>
                </div>

                <div class="hero-illustration">
                    <img
                        src="/home.svg"
                        alt="Home Insurance Illustration"
                        width="1000"
                        height="1000"
                        style="width: 100%; max-width: 32rem; height: auto; object-fit: contain;"
                    />
                </div>
            </div>
        </div>
    }
}
