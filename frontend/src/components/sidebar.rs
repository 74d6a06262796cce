use shared::{Command, Page};
use yew::prelude::*;

use super::connection_status::ConnectionStatus;
use crate::hooks::use_controller::current_hash;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub page: Page,
    pub backend_online: Option<bool>,
    pub dispatch: Callback<Command>,
}

/// Page navigation. A link to another page changes the URL hash and the hash
/// listener navigates; a link to the page already in the hash fires no hash
/// change, so its click navigates directly to reload the page data.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let link = |page: Page, icon: &'static str| {
        let class = classes!("nav-link", (props.page == page).then_some("active"));
        let onclick = {
            let dispatch = props.dispatch.clone();
            Callback::from(move |_: MouseEvent| {
                if page.is_current(&current_hash()) {
                    dispatch.emit(Command::Navigate(page));
                }
            })
        };

        html! {
            <li class="nav-item">
                <a class={class} href={format!("#{}", page.slug())} {onclick}>
                    <i class={classes!("fas", icon)}></i>
                    {" "}{page.title()}
                </a>
            </li>
        }
    };

    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <h1>{"Controle de Despesas"}</h1>
            </div>
            <ul class="nav flex-column">
                {link(Page::Expenses, "fa-receipt")}
                {link(Page::Statistics, "fa-chart-pie")}
            </ul>
            <ConnectionStatus online={props.backend_online} />
        </nav>
    }
}
