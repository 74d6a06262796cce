use shared::Page;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ExpensesPage, Sidebar, StatisticsPage};
use hooks::use_controller;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let controller = use_controller();
    let state = controller.state;
    let dispatch = controller.dispatch;

    let page = match state.page {
        Page::Expenses => html! {
            <ExpensesPage state={state.clone()} dispatch={dispatch.clone()} />
        },
        Page::Statistics => html! {
            <StatisticsPage state={state.clone()} dispatch={dispatch.clone()} />
        },
    };

    html! {
        <div class="app-layout">
            <Sidebar page={state.page} backend_online={state.backend_online} dispatch={dispatch.clone()} />
            <main class="main-content">
                {page}
            </main>
        </div>
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("main", "starting despesas frontend");
    yew::Renderer::<App>::new().render();
}
