use thiserror::Error;

/// Failure of a single backend call.
///
/// `context` names the operation in the user's language ("obter despesas"),
/// so `to_string()` yields messages like `Erro ao obter despesas: 500`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Falha de rede ao {context}: {message}")]
    Network { context: &'static str, message: String },

    #[error("Erro ao {context}: {status}")]
    Status { context: &'static str, status: u16 },

    #[error("Resposta inválida ao {context}: {message}")]
    Decode { context: &'static str, message: String },

    #[error("Falha ao preparar requisição para {context}: {message}")]
    Encode { context: &'static str, message: String },
}

/// Failure of a dispatched command
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    /// A required form field was left empty; no request was sent
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,

    /// A form field could not be parsed; no request was sent
    #[error("Campo inválido: {0}")]
    Validation(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    /// Save dispatched while no expense form is open
    #[error("Nenhum formulário de despesa aberto")]
    NoOpenForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_carries_code() {
        let error = ApiError::Status { context: "obter despesas", status: 404 };
        assert_eq!(error.to_string(), "Erro ao obter despesas: 404");
    }

    #[test]
    fn test_controller_error_wraps_api_error_transparently() {
        let api = ApiError::Network { context: "excluir despesa", message: "offline".into() };
        let error: ControllerError = api.clone().into();
        assert_eq!(error.to_string(), api.to_string());
    }
}
