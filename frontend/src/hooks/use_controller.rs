use std::rc::Rc;

use gloo::events::EventListener;
use shared::{Command, ExpenseController, Page, ViewState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::browser::BrowserView;
use crate::services::logging::Logger;

pub type AppController = ExpenseController<ApiClient, BrowserView>;

pub struct UseControllerResult {
    pub state: ViewState,
    pub dispatch: Callback<Command>,
}

pub fn current_hash() -> String {
    gloo::utils::window().location().hash().unwrap_or_default()
}

fn current_page() -> Option<Page> {
    Page::from_hash(&current_hash())
}

/// Owns the single controller of the app.
///
/// The controller pushes every state change into a Yew state handle, so
/// components re-render from `state` and talk back only through `dispatch`.
/// Hash changes are turned into `Command::Navigate`.
#[hook]
pub fn use_controller() -> UseControllerResult {
    let state = use_state(ViewState::default);

    let controller: Rc<AppController> = {
        let setter = state.setter();
        use_memo((), move |_| {
            ExpenseController::new(ApiClient::new(), BrowserView::new(setter))
        })
    };

    let dispatch = {
        let controller = controller.clone();

        use_callback((), move |command: Command, _| {
            let controller = controller.clone();

            spawn_local(async move {
                let label = format!("{:?}", command);
                if let Err(error) = controller.dispatch(command).await {
                    Logger::debug_with_component("use_controller", &format!("{} ended with: {}", label, error));
                }
            });
        })
    };

    // Initial load, health check, and hash navigation
    {
        let dispatch = dispatch.clone();

        use_effect_with((), move |_| {
            dispatch.emit(Command::Init(current_page().unwrap_or_default()));
            dispatch.emit(Command::CheckConnection);

            let listener = EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
                if let Some(page) = current_page() {
                    dispatch.emit(Command::Navigate(page));
                }
            });

            move || drop(listener)
        });
    }

    UseControllerResult {
        state: (*state).clone(),
        dispatch,
    }
}
