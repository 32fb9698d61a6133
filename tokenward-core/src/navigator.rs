use crate::error::Result;

use std::cell::RefCell;
use std::rc::Rc;

/// Full page navigation.
pub trait Navigator {
    fn go_to(&self, path: &str) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn go_to(&self, path: &str) -> Result<()> {
        (**self).go_to(path)
    }
}

/// Records navigation targets instead of leaving the page.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.visited.borrow_mut().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) -> Result<()> {
        self.visited.borrow_mut().push(path.to_string());
        Ok(())
    }
}
