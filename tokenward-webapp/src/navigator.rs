use tokenward_core::{Error, Navigator, Result};

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn go_to(&self, path: &str) -> Result<()> {
        gloo_utils::window()
            .location()
            .set_href(path)
            .map_err(|e| Error::Navigation(path.to_string(), crate::describe(&e)))
    }
}
