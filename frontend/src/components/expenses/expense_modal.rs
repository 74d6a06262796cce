use shared::view::{CategoryOption, CATEGORY_PLACEHOLDER};
use shared::{ExpenseModal as ModalState, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub modal: ModalState,
    pub categories: Vec<CategoryOption>,
    /// Disables the save button
    pub saving: bool,
    pub on_field: Callback<(FormField, String)>,
    pub on_save: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_handler(on_field: &Callback<(FormField, String)>, field: FormField) -> Callback<InputEvent> {
    on_field.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    })
}

#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let form = &props.modal.form;

    let on_category_change = props.on_field.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        (FormField::Category, select.value())
    });

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_save_click = props.on_save.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay">
            <div class="modal-dialog" id="modal-despesa">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id="modalDespesaLabel">{props.modal.mode.title()}</h5>
                        <button type="button" class="btn-close" aria-label="Fechar" onclick={on_close.clone()}></button>
                    </div>
                    <form id="form-despesa" onsubmit={on_submit}>
                        <div class="modal-body">
                            <input type="hidden" id="despesa-id" value={form.id.clone()} />
                            <div class="mb-3">
                                <label for="despesa-descricao" class="form-label">{"Descrição"}</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="despesa-descricao"
                                    value={form.description.clone()}
                                    oninput={input_handler(&props.on_field, FormField::Description)}
                                />
                            </div>
                            <div class="mb-3">
                                <label for="despesa-valor" class="form-label">{"Valor (R$)"}</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    class="form-control"
                                    id="despesa-valor"
                                    value={form.amount.clone()}
                                    oninput={input_handler(&props.on_field, FormField::Amount)}
                                />
                            </div>
                            <div class="mb-3">
                                <label for="despesa-categoria" class="form-label">{"Categoria"}</label>
                                <select class="form-select" id="despesa-categoria" onchange={on_category_change}>
                                    <option value="" selected={form.category_id.is_empty()}>{CATEGORY_PLACEHOLDER}</option>
                                    {for props.categories.iter().map(|option| html! {
                                        <option
                                            value={option.value.clone()}
                                            selected={option.value == form.category_id}
                                        >
                                            {&option.label}
                                        </option>
                                    })}
                                </select>
                            </div>
                            <div class="mb-3">
                                <label for="despesa-data" class="form-label">{"Data"}</label>
                                <input
                                    type="date"
                                    class="form-control"
                                    id="despesa-data"
                                    value={form.date.clone()}
                                    oninput={input_handler(&props.on_field, FormField::Date)}
                                />
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" onclick={on_close}>{"Cancelar"}</button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                id="btn-salvar-despesa"
                                disabled={props.saving}
                                onclick={on_save_click}
                            >
                                {if props.saving { "Salvando..." } else { "Salvar" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
