use shared::Period;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PeriodTabsProps {
    /// DOM id of the tab list
    pub id: AttrValue,
    pub selected: Period,
    pub on_select: Callback<Period>,
}

#[function_component(PeriodTabs)]
pub fn period_tabs(props: &PeriodTabsProps) -> Html {
    html! {
        <ul class="nav nav-tabs" id={props.id.clone()}>
            {for Period::ALL.iter().map(|period| {
                let period = *period;
                let is_active = period == props.selected;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(period);
                    })
                };

                html! {
                    <li class="nav-item">
                        <a
                            class={classes!("nav-link", is_active.then_some("active"))}
                            href="#"
                            data-periodo={period.as_str()}
                            onclick={onclick}
                        >
                            {period.label()}
                        </a>
                    </li>
                }
            })}
        </ul>
    }
}
