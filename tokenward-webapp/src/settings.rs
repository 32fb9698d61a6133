use tokenward_core::{names::SETTINGS_ELEMENT_ID, settings_or_default, Settings};

/// Reads the JSON text of `<script id="settings">`. Pages without it, or with
/// unreadable JSON in it, get the defaults.
pub fn load_settings(document: &web_sys::Document) -> Settings {
    let text = document
        .get_element_by_id(SETTINGS_ELEMENT_ID)
        .map(|element| element.text_content().unwrap_or_default());
    let settings = settings_or_default(text.as_deref());
    tracing::debug!("settings: {settings:?}");
    settings
}
