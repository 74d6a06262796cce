use async_trait::async_trait;
use chrono::NaiveDate;
use gloo::timers::future::TimeoutFuture;
use shared::{ViewPort, ViewState};
use yew::functional::UseStateSetter;

use super::date_utils;

/// `ViewPort` backed by the browser: state snapshots go into a Yew state
/// handle, prompts use the native dialogs.
pub struct BrowserView {
    state: UseStateSetter<ViewState>,
}

impl BrowserView {
    pub fn new(state: UseStateSetter<ViewState>) -> Self {
        Self { state }
    }
}

#[async_trait(?Send)]
impl ViewPort for BrowserView {
    fn render(&self, state: &ViewState) {
        self.state.set(state.clone());
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn today(&self) -> NaiveDate {
        date_utils::today()
    }

    async fn cooldown(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
