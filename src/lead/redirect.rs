use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::config::AffiliateConfig;
use crate::lead::zip::is_complete_zip;

pub const ZIP_SUBMISSION_EVENT: &str = "zip_submission";

pub trait CookieJar {
    fn cookie(&self, name: &str) -> Option<String>;
}

pub trait AnalyticsSink {
    fn track(&self, event: &str, properties: Value);
}

pub trait PageNavigator {
    fn navigate(&self, url: &str);
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter a valid 5-digit ZIP code")]
    InvalidZip,
}

/// Looks `name` up in a `document.cookie` style string ("a=1; b=2").
/// A name that appears more than once is treated as absent, as is an empty value.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    let haystack = format!("; {}", cookie_header);
    let needle = format!("; {}=", name);
    let mut parts = haystack.split(needle.as_str());
    parts.next()?;
    let rest = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let value = rest.split(';').next().unwrap_or_default();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// UTM values left behind by whichever page brought the visitor here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributionCookies {
    pub utm_source: String,
    pub utm_id: String,
    pub utm_s1: String,
}

impl AttributionCookies {
    pub fn read(jar: &impl CookieJar) -> Self {
        Self {
            utm_source: jar.cookie("utm_source").unwrap_or_default(),
            utm_id: jar.cookie("utm_id").unwrap_or_default(),
            utm_s1: jar.cookie("utm_s1").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ZipSubmission<'a> {
    state: &'a str,
    zip_code: &'a str,
}

// application/x-www-form-urlencoded, byte for byte what URLSearchParams emits:
// space as '+', '*' left alone, '~' escaped.
fn form_encode(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%20", "+")
        .replace("%2A", "*")
        .replace('~', "%7E")
}

pub fn build_redirect_url(config: &AffiliateConfig, zip_code: &str, cookies: &AttributionCookies) -> String {
    let mut params: Vec<(&str, &str)> = vec![
        ("zip_code", zip_code),
        ("referrer", config.referrer),
        ("tid", config.tracking_id),
    ];
    if !cookies.utm_source.is_empty() {
        params.push(("subid", cookies.utm_source.as_str()));
    }
    if !cookies.utm_id.is_empty() {
        params.push(("subid2", cookies.utm_id.as_str()));
    }
    if !cookies.utm_s1.is_empty() {
        params.push(("c1", cookies.utm_s1.as_str()));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", form_encode(key), form_encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", config.form_url(), query)
}

/// Sends the visitor to the partner quote form. Returns the URL navigated to.
pub fn submit_zip(
    config: &AffiliateConfig,
    zip_code: &str,
    state: &str,
    cookies: &impl CookieJar,
    analytics: &impl AnalyticsSink,
    navigator: &impl PageNavigator,
) -> Result<String, SubmitError> {
    if !is_complete_zip(zip_code) {
        return Err(SubmitError::InvalidZip);
    }

    let attribution = AttributionCookies::read(cookies);
    let url = build_redirect_url(config, zip_code, &attribution);

    let properties = serde_json::to_value(ZipSubmission { state, zip_code }).unwrap_or(Value::Null);
    analytics.track(ZIP_SUBMISSION_EVENT, properties);

    info!("Redirecting ZIP {} to affiliate form", zip_code);
    navigator.navigate(&url);
    Ok(url)
}
