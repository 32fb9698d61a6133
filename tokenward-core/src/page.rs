use crate::error::Result;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub trait ClickEvent {
    fn prevent_default(&self);
}

pub type ClickHandler = Box<dyn Fn(&dyn ClickEvent) -> Result<()>>;

/// An element of the page that can react to clicks.
pub trait Control {
    /// Handlers stay attached for the rest of the page lifetime.
    fn on_click(&self, handler: ClickHandler) -> Result<()>;
}

/// The parsed page structure.
pub trait Page {
    type Control: Control;

    fn control_by_id(&self, id: &str) -> Option<Self::Control>;
}

/// What happened when a fake control was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Click {
    pub handlers_run: usize,
    pub default_prevented: bool,
}

#[derive(Default)]
struct FakeClick {
    prevented: Cell<bool>,
}

impl ClickEvent for FakeClick {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[derive(Clone, Default)]
pub struct FakeControl {
    handlers: Rc<RefCell<Vec<Rc<ClickHandler>>>>,
}

impl FakeControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Dispatches one click to the handlers attached when the click starts, in
    /// attachment order. The first handler error stops dispatch.
    pub fn click(&self) -> Result<Click> {
        let event = FakeClick::default();
        let handlers = self.handlers.borrow().clone();
        for handler in handlers.iter() {
            handler(&event as &dyn ClickEvent)?;
        }
        Ok(Click {
            handlers_run: handlers.len(),
            default_prevented: event.prevented.get(),
        })
    }
}

impl Control for FakeControl {
    fn on_click(&self, handler: ClickHandler) -> Result<()> {
        self.handlers.borrow_mut().push(Rc::new(handler));
        Ok(())
    }
}

/// A page made of controls looked up by id.
#[derive(Clone, Default)]
pub struct FakePage {
    controls: HashMap<String, FakeControl>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, id: &str) -> Self {
        self.controls.insert(id.to_string(), FakeControl::new());
        self
    }

    pub fn control(&self, id: &str) -> Option<FakeControl> {
        self.controls.get(id).cloned()
    }
}

impl Page for FakePage {
    type Control = FakeControl;

    fn control_by_id(&self, id: &str) -> Option<FakeControl> {
        self.control(id)
    }
}
