use tokenward_types::Settings;

/// Settings from the text of the page's settings element, if any. Malformed
/// text is logged and replaced by the defaults, so the token operations never
/// depend on configuration they do not read.
pub fn settings_or_default(text: Option<&str>) -> Settings {
    let Some(text) = text else {
        return Settings::default();
    };
    match Settings::from_json(text) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("ignoring malformed settings: {e}");
            Settings::default()
        }
    }
}
