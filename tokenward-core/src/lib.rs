pub mod binding;
pub mod config;
pub mod error;
pub mod navigator;
pub mod page;
pub mod session;
pub mod storage;

pub use binding::bind_logout_control;
pub use config::settings_or_default;
pub use error::{Error, Result};
pub use navigator::{Navigator, RecordingNavigator};
pub use page::{ClickEvent, ClickHandler, Control, FakeControl, FakePage, Page};
pub use session::{Access, Session};
pub use storage::{MemoryStorage, Storage};

pub use tokenward_types::{names, Settings};
