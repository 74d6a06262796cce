use shared::view::{ExpenseRow, ExpenseTableView};
use shared::ExpenseId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub table: ExpenseTableView,
    pub on_edit: Callback<ExpenseId>,
    pub on_delete: Callback<ExpenseId>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let body = match &props.table {
        ExpenseTableView::Empty { message } => html! {
            <tr>
                <td colspan="5" class="text-center">{*message}</td>
            </tr>
        },
        ExpenseTableView::Rows(rows) => rows
            .iter()
            .map(|row| expense_row(row, &props.on_edit, &props.on_delete))
            .collect::<Html>(),
    };

    html! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead>
                    <tr>
                        <th>{"Descrição"}</th>
                        <th>{"Valor"}</th>
                        <th>{"Categoria"}</th>
                        <th>{"Data"}</th>
                        <th>{"Ações"}</th>
                    </tr>
                </thead>
                <tbody id="tabela-despesas">
                    {body}
                </tbody>
            </table>
        </div>
    }
}

fn expense_row(row: &ExpenseRow, on_edit: &Callback<ExpenseId>, on_delete: &Callback<ExpenseId>) -> Html {
    let id = row.id;
    let onclick_edit = on_edit.reform(move |_: MouseEvent| id);
    let onclick_delete = on_delete.reform(move |_: MouseEvent| id);

    html! {
        <tr key={id.to_string()}>
            <td>{&row.description}</td>
            <td class="valor-negativo">{&row.amount_text}</td>
            <td>
                <span class="badge" style={format!("background-color: {}", row.category_color)}>
                    {&row.category_name}
                </span>
            </td>
            <td>{&row.date_text}</td>
            <td>
                <button class="btn btn-sm btn-outline-primary btn-editar" title="Editar" onclick={onclick_edit}>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="btn btn-sm btn-outline-danger btn-excluir" title="Excluir" onclick={onclick_delete}>
                    <i class="fas fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}
