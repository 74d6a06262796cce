use shared::chart::{list_entries, EMPTY_MESSAGE};
use shared::{CategoryId, CategoryTotal};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub data: Vec<CategoryTotal>,
    pub highlighted: Option<CategoryId>,
    /// Emits the hovered category, `None` when the pointer leaves an entry
    pub on_hover: Callback<Option<CategoryId>>,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    if props.data.is_empty() {
        return html! {
            <div id="lista-categorias" class="categoria-lista">
                <p class="text-center">{EMPTY_MESSAGE}</p>
            </div>
        };
    }

    html! {
        <div id="lista-categorias" class="categoria-lista">
            {for list_entries(&props.data).into_iter().map(|entry| {
                let id = entry.id;
                let onmouseenter = props.on_hover.reform(move |_: MouseEvent| Some(id));
                let onmouseleave = props.on_hover.reform(|_: MouseEvent| None);
                let hovered = props.highlighted == Some(id);

                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("categoria-item", hovered.then_some("categoria-hover"))}
                        {onmouseenter}
                        {onmouseleave}
                    >
                        <div class="categoria-info">
                            <span class="categoria-cor" style={format!("background-color: {}", entry.color)}></span>
                            <span class="categoria-nome">{entry.name}</span>
                            <span class="categoria-valor">{entry.value_text}</span>
                        </div>
                        <div class="progress">
                            <div
                                class="progress-bar"
                                role="progressbar"
                                style={format!("width: {:.2}%; background-color: {}", entry.bar_width, entry.color)}
                            ></div>
                        </div>
                        <small class="categoria-percentual">{entry.percent_text}</small>
                    </div>
                }
            })}
        </div>
    }
}
