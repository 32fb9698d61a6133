/// Fixed names shared between the session helper and the host page.
pub mod names {
    /// Local storage key holding the token.
    pub const TOKEN_KEY: &str = "token";

    /// Route every unauthenticated visitor is sent to.
    pub const LOGIN_ROUTE: &str = "/login";

    /// Id of the optional logout control in the page markup.
    pub const LOGOUT_CONTROL_ID: &str = "logout-btn";

    /// Id of the `<script>` element carrying the JSON settings.
    pub const SETTINGS_ELEMENT_ID: &str = "settings";
}

pub mod settings {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Settings {
        /// Base path for network calls. Nothing reads it yet.
        #[serde(default)]
        pub api_url: String,
    }

    impl Settings {
        /// Parses the text of the settings element. Blank text and `null` both
        /// mean defaults.
        pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
            if text.trim().is_empty() {
                return Ok(Self::default());
            }
            Ok(serde_json::from_str::<Option<Self>>(text)?.unwrap_or_default())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn default_api_url_is_empty() {
            assert_eq!(Settings::default().api_url, "");
        }

        #[test]
        fn parses_api_url() {
            let settings = Settings::from_json(r#"{"api_url": "/api"}"#).unwrap();
            assert_eq!(settings.api_url, "/api");
        }

        #[test]
        fn null_and_blank_fall_back_to_defaults() {
            assert_eq!(Settings::from_json("null").unwrap(), Settings::default());
            assert_eq!(Settings::from_json("  \n").unwrap(), Settings::default());
            assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
        }

        #[test]
        fn malformed_json_is_rejected() {
            assert!(Settings::from_json("{api_url:").is_err());
        }
    }
}

pub use settings::Settings;
