//! ZIP field rules and the snapshot the hero renders from.

pub const ZIP_CODE_LEN: usize = 5;

pub const HEADING: &str = "Find the Best Home Insurance Rates";

/// 0 to 5 ASCII digits, i.e. anything the field may hold while typing.
pub fn is_partial_zip(value: &str) -> bool {
    value.len() <= ZIP_CODE_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_complete_zip(value: &str) -> bool {
    value.len() == ZIP_CODE_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the new field value, or `None` when the keystroke is discarded.
pub fn accept_zip_keystroke(proposed: &str) -> Option<String> {
    if is_partial_zip(proposed) {
        Some(proposed.to_string())
    } else {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub zip_code: String,
    pub city_name: String,
    pub state: String,
    pub is_loading_location: bool,
}

impl FormState {
    /// Gate for the Continue button and the Enter key.
    pub fn can_continue(&self) -> bool {
        !self.is_loading_location && is_complete_zip(&self.zip_code)
    }

    pub fn should_submit_on_click(&self) -> bool {
        self.can_continue()
    }

    /// Only Enter submits, and only while the button itself would.
    pub fn should_submit_on_key(&self, key: &str) -> bool {
        key == "Enter" && self.can_continue()
    }

    pub fn heading(&self) -> String {
        if self.city_name.is_empty() {
            HEADING.to_string()
        } else {
            format!("{} in {}", HEADING, self.city_name)
        }
    }

    pub fn zip_placeholder(&self) -> &'static str {
        if self.is_loading_location {
            "Detecting your location..."
        } else {
            "Zip Code e.g. 11102"
        }
    }

    pub fn continue_label(&self) -> &'static str {
        if self.is_loading_location {
            "Loading..."
        } else {
            "Continue"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_chars(input: &str) -> String {
        let mut field = String::new();
        for c in input.chars() {
            let proposed = format!("{}{}", field, c);
            if let Some(accepted) = accept_zip_keystroke(&proposed) {
                field = accepted;
            }
            assert!(is_partial_zip(&field));
        }
        field
    }

    #[test]
    fn typing_keeps_only_leading_digits() {
        assert_eq!(type_chars("90210"), "90210");
        assert_eq!(type_chars("9a0b2-1 0"), "90210");
        assert_eq!(type_chars("1234567"), "12345");
        assert_eq!(type_chars("abc"), "");
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert!(!is_partial_zip("١٢٣"));
        assert_eq!(accept_zip_keystroke("12３"), None);
    }

    #[test]
    fn pasted_values_are_all_or_nothing() {
        assert_eq!(accept_zip_keystroke("78701"), Some("78701".to_string()));
        assert_eq!(accept_zip_keystroke("78701-1234"), None);
        assert_eq!(accept_zip_keystroke(""), Some(String::new()));
    }

    #[test]
    fn complete_zip_requires_exactly_five_digits() {
        assert!(is_complete_zip("90210"));
        assert!(!is_complete_zip("1234"));
        assert!(!is_complete_zip("123456"));
        assert!(!is_complete_zip("9021a"));
    }

    #[test]
    fn continue_is_gated_on_loading_and_zip() {
        let mut form = FormState {
            zip_code: "90210".into(),
            ..Default::default()
        };
        assert!(form.can_continue());

        form.is_loading_location = true;
        assert!(!form.can_continue());

        form.is_loading_location = false;
        form.zip_code = "9021".into();
        assert!(!form.can_continue());
    }

    #[test]
    fn continue_gate_holds_for_every_reachable_state() {
        let zips = ["", "9", "90", "902", "9021", "90210"];
        for loading in [false, true] {
            for zip in zips {
                let form = FormState {
                    zip_code: zip.into(),
                    is_loading_location: loading,
                    ..Default::default()
                };
                let expected = !loading && zip.len() == ZIP_CODE_LEN;
                assert_eq!(form.can_continue(), expected, "zip={:?} loading={}", zip, loading);
                assert_eq!(form.should_submit_on_click(), expected, "zip={:?} loading={}", zip, loading);
                assert_eq!(form.should_submit_on_key("Enter"), expected, "zip={:?} loading={}", zip, loading);
            }
        }
    }

    #[test]
    fn disabled_continue_ignores_enter_and_click() {
        let loading = FormState {
            zip_code: "90210".into(),
            is_loading_location: true,
            ..Default::default()
        };
        assert!(!loading.should_submit_on_click());
        assert!(!loading.should_submit_on_key("Enter"));

        let short = FormState {
            zip_code: "1234".into(),
            ..Default::default()
        };
        assert!(!short.should_submit_on_click());
        assert!(!short.should_submit_on_key("Enter"));
    }

    #[test]
    fn only_enter_submits_from_the_keyboard() {
        let ready = FormState {
            zip_code: "90210".into(),
            ..Default::default()
        };
        assert!(ready.should_submit_on_key("Enter"));
        assert!(!ready.should_submit_on_key("a"));
        assert!(!ready.should_submit_on_key("Tab"));
    }

    #[test]
    fn heading_mentions_city_when_known() {
        let mut form = FormState::default();
        assert_eq!(form.heading(), "Find the Best Home Insurance Rates");

        form.city_name = "Austin".into();
        assert!(form.heading().starts_with(HEADING));
        assert!(form.heading().ends_with(" in Austin"));
    }

    #[test]
    fn loading_swaps_placeholder_and_label() {
        let mut form = FormState::default();
        assert_eq!(form.zip_placeholder(), "Zip Code e.g. 11102");
        assert_eq!(form.continue_label(), "Continue");

        form.is_loading_location = true;
        assert_eq!(form.zip_placeholder(), "Detecting your location...");
        assert_eq!(form.continue_label(), "Loading...");
    }
}
