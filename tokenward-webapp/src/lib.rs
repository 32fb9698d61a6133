mod exports;
mod navigator;
mod page;
mod settings;
mod storage;

pub use navigator::WindowNavigator;
pub use page::{DocumentPage, ElementControl};
pub use settings::load_settings;
pub use storage::LocalStorageBackend;

use tokenward_core::{bind_logout_control, Error, Result, Session};

use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub type BrowserSession = Session<LocalStorageBackend, WindowNavigator>;

thread_local! {
    static SESSION: OnceCell<Rc<BrowserSession>> = OnceCell::new();
}

/// The page-wide session, created with the page settings on first use.
pub fn session() -> Rc<BrowserSession> {
    SESSION.with(|cell| {
        cell.get_or_init(|| {
            let settings = load_settings(&gloo_utils::document());
            Rc::new(Session::new(LocalStorageBackend, WindowNavigator, settings))
        })
        .clone()
    })
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn init_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn on_ready() -> Result<()> {
    let page = DocumentPage::new(gloo_utils::document());
    bind_logout_control(&page, session())?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();
    let document = gloo_utils::document();
    if document.ready_state() != "loading" {
        return on_ready().map_err(to_js);
    }
    let listener = Closure::<dyn Fn()>::new(|| {
        if let Err(e) = on_ready() {
            tracing::error!("page setup failed: {e}");
            wasm_bindgen::throw_str(&e.to_string());
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}
