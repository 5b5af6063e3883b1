/// IP based location lookup served next to the site. Always same-origin,
/// including under `trunk serve`.
pub const LOCATION_ENDPOINT: &str = "/api/get-location";

/// Upper bound for requestIdleCallback before the lookup is forced to run.
pub const LOCATION_IDLE_TIMEOUT_MS: u32 = 2_000;

/// Delay used when the browser has no requestIdleCallback.
pub const LOCATION_FALLBACK_DELAY_MS: u32 = 100;

/// Where qualified leads are sent, and how the partner attributes them to us.
#[derive(Clone, Debug, PartialEq)]
pub struct AffiliateConfig {
    pub base_url: &'static str,
    pub form_path: &'static str,
    pub referrer: &'static str,
    pub tracking_id: &'static str,
}

impl Default for AffiliateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://homequote.assurerates.com",
            form_path: "/form",
            referrer: "homequotes.assurerates.com",
            tracking_id: "3108",
        }
    }
}

impl AffiliateConfig {
    pub fn form_url(&self) -> String {
        format!("{}{}", self.base_url, self.form_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_affiliate_points_at_quote_form() {
        let config = AffiliateConfig::default();
        assert_eq!(config.form_url(), "https://homequote.assurerates.com/form");
        assert_eq!(config.referrer, "homequotes.assurerates.com");
        assert_eq!(config.tracking_id, "3108");
    }

    #[test]
    fn location_lookup_is_same_origin() {
        assert_eq!(LOCATION_ENDPOINT, "/api/get-location");
        assert!(!LOCATION_ENDPOINT.contains("://"));
    }
}
