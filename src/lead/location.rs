use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, IdleRequestOptions, Window};

use crate::config;
use crate::lead::zip::is_partial_zip;

/// Body of `GET /api/get-location`. Every field may be absent or null.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LocationLookupError {
    #[error("location request failed: {0}")]
    Network(String),
    #[error("location API returned {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("location response was not valid JSON: {0}")]
    Decode(String),
}

pub async fn fetch_location() -> Result<LocationResponse, LocationLookupError> {
    let response = Request::get(config::LOCATION_ENDPOINT)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| LocationLookupError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LocationLookupError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<LocationResponse>()
        .await
        .map_err(|e| LocationLookupError::Decode(e.to_string()))
}

/// Personalization applied to the hero once the lookup settles.
/// All fields empty means "location unknown".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedLocation {
    pub city_name: String,
    pub zip_code: String,
    pub state: String,
}

impl ResolvedLocation {
    pub fn from_lookup(result: Result<LocationResponse, LocationLookupError>) -> Self {
        match result {
            Ok(response) => Self::from_response(response),
            Err(e) => {
                warn!("Location lookup failed, continuing without it: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_response(response: LocationResponse) -> Self {
        let city = response.city.unwrap_or_default();
        let zip_code = response.zip_code.unwrap_or_default();
        if city.is_empty() || zip_code.is_empty() {
            debug!("Location response missing city or ZIP");
            return Self::default();
        }

        // The field only ever holds up to five digits; anything else is not a usable prefill.
        let zip_code = if is_partial_zip(&zip_code) {
            zip_code
        } else {
            debug!("Ignoring malformed ZIP from location lookup: {}", zip_code);
            String::new()
        };

        Self {
            city_name: city,
            zip_code,
            state: response.state.unwrap_or_default(),
        }
    }

    pub fn is_known(&self) -> bool {
        !self.city_name.is_empty()
    }
}

enum Pending {
    Idle {
        handle: u32,
        _callback: Closure<dyn FnMut()>,
    },
    Timer(Timeout),
}

/// A lookup waiting for the browser to go idle. Dropping it before it fires
/// cancels the lookup; once started, the request runs to completion.
pub struct ScheduledLookup {
    pending: Option<Pending>,
}

impl Drop for ScheduledLookup {
    fn drop(&mut self) {
        match self.pending.take() {
            Some(Pending::Idle { handle, _callback }) => {
                if let Some(window) = web_sys::window() {
                    window.cancel_idle_callback(handle);
                }
            }
            Some(Pending::Timer(timeout)) => drop(timeout),
            None => {}
        }
    }
}

fn supports_idle_callback(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("requestIdleCallback")).unwrap_or(false)
}

/// Defers `run` until the browser is idle (at most 2s), or 100ms when
/// requestIdleCallback is unavailable.
pub fn schedule_lookup<F>(run: F) -> ScheduledLookup
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        warn!("No window available, skipping location lookup");
        return ScheduledLookup { pending: None };
    };

    if !supports_idle_callback(&window) {
        debug!("requestIdleCallback unsupported, falling back to a {}ms timeout", config::LOCATION_FALLBACK_DELAY_MS);
        let timeout = Timeout::new(config::LOCATION_FALLBACK_DELAY_MS, run);
        return ScheduledLookup {
            pending: Some(Pending::Timer(timeout)),
        };
    }

    let callback: Closure<dyn FnMut()> = Closure::once(run);
    let options = IdleRequestOptions::new();
    options.set_timeout(config::LOCATION_IDLE_TIMEOUT_MS);

    match window.request_idle_callback_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(handle) => {
            info!("Location lookup scheduled for idle time");
            ScheduledLookup {
                pending: Some(Pending::Idle {
                    handle,
                    _callback: callback,
                }),
            }
        }
        Err(e) => {
            warn!("requestIdleCallback failed, location stays unknown: {:?}", e);
            ScheduledLookup { pending: None }
        }
    }
}
