use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConnectionStatusProps {
    /// `None` until the first health check answers
    pub online: Option<bool>,
}

#[function_component(ConnectionStatus)]
pub fn connection_status(props: &ConnectionStatusProps) -> Html {
    let (class, text) = match props.online {
        Some(true) => ("connection-status online", "Servidor conectado"),
        Some(false) => ("connection-status offline", "Servidor indisponível"),
        None => ("connection-status checking", "Verificando servidor..."),
    };

    html! {
        <div class={class}>
            <span class="status-dot"></span>
            <span class="status-text">{text}</span>
        </div>
    }
}
