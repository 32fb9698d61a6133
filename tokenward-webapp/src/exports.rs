//! The helper as seen from other scripts on the page. Errors are thrown.

use crate::{session, to_js};

use tokenward_core::Access;
use wasm_bindgen::prelude::*;

/// `null` when no token is stored, like `localStorage.getItem`.
#[wasm_bindgen(js_name = getToken)]
pub fn get_token() -> Result<JsValue, JsValue> {
    let token = session().get_token().map_err(to_js)?;
    Ok(token.map(JsValue::from).unwrap_or(JsValue::NULL))
}

#[wasm_bindgen(js_name = setToken)]
pub fn set_token(token: &str) -> Result<(), JsValue> {
    session().set_token(token).map_err(to_js)
}

#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    session().logout().map_err(to_js)
}

/// Returns `false` when the page is being sent to the login route.
#[wasm_bindgen(js_name = requireAuth)]
pub fn require_auth() -> Result<bool, JsValue> {
    session()
        .require_auth()
        .map(|access| access == Access::Granted)
        .map_err(to_js)
}

#[wasm_bindgen(js_name = isAuthenticated)]
pub fn is_authenticated() -> Result<bool, JsValue> {
    session().is_authenticated().map_err(to_js)
}

#[wasm_bindgen]
pub fn settings() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(session().settings())?)
}

#[wasm_bindgen(js_name = apiUrl)]
pub fn api_url() -> String {
    session().api_url().to_string()
}
