pub mod expense_modal;
pub mod expense_table;

use shared::view::{category_options, expenses_total_text, render_expenses};
use shared::{Command, FormField, ViewState};
use yew::prelude::*;

use super::period_tabs::PeriodTabs;
use expense_modal::ExpenseModal;
use expense_table::ExpenseTable;

#[derive(Properties, PartialEq)]
pub struct ExpensesPageProps {
    pub state: ViewState,
    pub dispatch: Callback<Command>,
}

#[function_component(ExpensesPage)]
pub fn expenses_page(props: &ExpensesPageProps) -> Html {
    let state = &props.state;
    let dispatch = &props.dispatch;

    let on_period = dispatch.reform(Command::SelectPeriod);
    let on_new = dispatch.reform(|_: MouseEvent| Command::OpenCreate);
    let on_edit = dispatch.reform(Command::OpenEdit);
    let on_delete = dispatch.reform(Command::Delete);

    let modal = match &state.modal {
        Some(modal) => html! {
            <ExpenseModal
                modal={modal.clone()}
                categories={category_options(state)}
                saving={state.saving}
                on_field={dispatch.reform(|(field, value): (FormField, String)| Command::EditField(field, value))}
                on_save={dispatch.reform(|_: ()| Command::Save)}
                on_close={dispatch.reform(|_: ()| Command::CloseModal)}
            />
        },
        None => html! {},
    };

    html! {
        <section class="content-page active" id="despesas-page">
            <div class="page-header">
                <h2>{"Despesas"}</h2>
                <button class="btn btn-primary" id="btn-nova-despesa" onclick={on_new}>
                    <i class="fas fa-plus"></i>{" Nova Despesa"}
                </button>
            </div>

            <PeriodTabs id="periodoTabs" selected={state.period} on_select={on_period} />

            <div class="card total-card">
                <div class="card-body">
                    <span class="total-label">{"Total: "}</span>
                    <span class="total-valor" id="total-despesas">{expenses_total_text(state)}</span>
                </div>
            </div>

            <ExpenseTable table={render_expenses(state)} on_edit={on_edit} on_delete={on_delete} />

            {modal}
        </section>
    }
}
