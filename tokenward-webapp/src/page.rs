use tokenward_core::{ClickEvent, ClickHandler, Control, Error, Page, Result};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct DocumentPage(web_sys::Document);

impl DocumentPage {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Page for DocumentPage {
    type Control = ElementControl;

    fn control_by_id(&self, id: &str) -> Option<ElementControl> {
        self.0.get_element_by_id(id).map(ElementControl)
    }
}

pub struct ElementControl(web_sys::Element);

struct DomClick<'a>(&'a web_sys::Event);

impl ClickEvent for DomClick<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

impl Control for ElementControl {
    fn on_click(&self, handler: ClickHandler) -> Result<()> {
        let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Err(e) = handler(&DomClick(&event) as &dyn ClickEvent) {
                tracing::error!("click handler failed: {e}");
                wasm_bindgen::throw_str(&e.to_string());
            }
        });
        self.0
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| Error::Binding(self.0.id(), crate::describe(&e)))?;
        // The listener lives as long as the page.
        listener.forget();
        Ok(())
    }
}
