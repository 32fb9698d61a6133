use crate::error::Result;
use crate::navigator::Navigator;
use crate::page::{ClickEvent, Control, Page};
use crate::session::Session;
use crate::storage::Storage;

use tokenward_types::names::LOGOUT_CONTROL_ID;

use std::rc::Rc;

/// Page load hook. Attaches a logout handler to the `logout-btn` control if
/// the page has one, and reports whether it did. A page without the control
/// is left alone.
pub fn bind_logout_control<P, S, N>(page: &P, session: Rc<Session<S, N>>) -> Result<bool>
where
    P: Page,
    S: Storage + 'static,
    N: Navigator + 'static,
{
    let Some(control) = page.control_by_id(LOGOUT_CONTROL_ID) else {
        tracing::debug!("no #{LOGOUT_CONTROL_ID} on this page");
        return Ok(false);
    };
    control.on_click(Box::new(move |event: &dyn ClickEvent| {
        event.prevent_default();
        session.logout()
    }))?;
    tracing::debug!("bound #{LOGOUT_CONTROL_ID}");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;
    use crate::page::{Click, FakePage};
    use crate::session::Access;
    use crate::storage::MemoryStorage;
    use tokenward_types::Settings;

    fn session(
        storage: &MemoryStorage,
        navigator: &RecordingNavigator,
    ) -> Rc<Session<MemoryStorage, RecordingNavigator>> {
        Rc::new(Session::new(
            storage.clone(),
            navigator.clone(),
            Settings::default(),
        ))
    }

    #[test]
    fn click_logs_out_once_and_prevents_default() {
        let storage = MemoryStorage::new();
        let navigator = RecordingNavigator::new();
        let session = session(&storage, &navigator);
        session.set_token("abc123").unwrap();

        let page = FakePage::new().with_control("logout-btn");
        assert!(bind_logout_control(&page, session.clone()).unwrap());

        let control = page.control("logout-btn").unwrap();
        assert_eq!(control.handler_count(), 1);
        assert_eq!(
            control.click().unwrap(),
            Click {
                handlers_run: 1,
                default_prevented: true
            }
        );
        assert_eq!(session.get_token().unwrap(), None);
        assert_eq!(navigator.visited(), vec!["/login"]);
    }

    #[test]
    fn page_without_control_is_untouched() {
        let storage = MemoryStorage::new();
        let navigator = RecordingNavigator::new();
        let session = session(&storage, &navigator);
        session.set_token("abc123").unwrap();

        let page = FakePage::new().with_control("login-btn");
        assert!(!bind_logout_control(&page, session.clone()).unwrap());

        assert_eq!(page.control("login-btn").unwrap().handler_count(), 0);
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc123"));
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn binding_does_not_log_out_by_itself() {
        let storage = MemoryStorage::new();
        let navigator = RecordingNavigator::new();
        let session = session(&storage, &navigator);
        session.set_token("abc123").unwrap();

        let page = FakePage::new().with_control("logout-btn");
        bind_logout_control(&page, session.clone()).unwrap();

        assert_eq!(session.get_token().unwrap().as_deref(), Some("abc123"));
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn click_surfaces_storage_failure() {
        let navigator = RecordingNavigator::new();
        let session = session(&MemoryStorage::unavailable(), &navigator);

        let page = FakePage::new().with_control("logout-btn");
        bind_logout_control(&page, session).unwrap();

        assert!(page.control("logout-btn").unwrap().click().is_err());
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn protected_page_round_trip() {
        let storage = MemoryStorage::new();
        let navigator = RecordingNavigator::new();
        let session = session(&storage, &navigator);
        let page = FakePage::new().with_control("logout-btn");
        bind_logout_control(&page, session.clone()).unwrap();

        assert_eq!(session.require_auth().unwrap(), Access::Redirected);
        assert_eq!(navigator.visited(), vec!["/login"]);

        navigator.clear();
        session.set_token("abc123").unwrap();
        assert_eq!(session.require_auth().unwrap(), Access::Granted);
        assert!(navigator.visited().is_empty());

        page.control("logout-btn").unwrap().click().unwrap();
        assert_eq!(session.get_token().unwrap(), None);
        assert_eq!(navigator.visited(), vec!["/login"]);
    }
}
