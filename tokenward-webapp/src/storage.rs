use tokenward_core::{Error, Result, Storage};

/// `window.localStorage`. Values are kept as raw strings so that any other
/// script reading `localStorage.getItem("token")` sees the same value.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

fn local_storage() -> Result<web_sys::Storage> {
    gloo_utils::window()
        .local_storage()
        .map_err(|e| Error::Storage(crate::describe(&e)))?
        .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))
}

impl Storage for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(crate::describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(crate::describe(&e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(crate::describe(&e)))
    }
}
