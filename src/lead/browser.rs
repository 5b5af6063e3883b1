//! Browser-backed collaborators for the redirect flow.

use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, window, HtmlDocument};

use crate::lead::redirect::{cookie_value, AnalyticsSink, CookieJar, PageNavigator};

/// Reads `document.cookie` on every lookup.
pub struct DocumentCookies;

impl CookieJar for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        let header = window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        cookie_value(&header, name)
    }
}

/// Forwards custom events to the Vercel Web Analytics queue (`window.va`).
pub struct VercelAnalytics;

impl VercelAnalytics {
    fn send(&self, event: &str, properties: Value) -> Result<(), JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let queue = js_sys::Reflect::get(&window, &JsValue::from_str("va"))?;
        let Some(queue) = queue.dyn_ref::<js_sys::Function>() else {
            gloo_console::debug!("Analytics script not loaded, dropping event", event);
            return Ok(());
        };

        let payload = json!({ "name": event, "data": properties })
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        queue.call2(&JsValue::NULL, &JsValue::from_str("event"), &payload)?;
        Ok(())
    }
}

impl AnalyticsSink for VercelAnalytics {
    fn track(&self, event: &str, properties: Value) {
        if let Err(e) = self.send(event, properties) {
            gloo_console::warn!("Failed to track analytics event", e);
        }
    }
}

/// Full page navigation in the current tab.
pub struct WindowNavigator;

impl PageNavigator for WindowNavigator {
    fn navigate(&self, url: &str) {
        if let Some(window) = window() {
            if let Err(e) = window.location().set_href(url) {
                gloo_console::error!("Navigation failed", e);
            }
        }
    }
}

pub fn alert_user(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            gloo_console::error!("Failed to show alert", e);
        }
    }
}
