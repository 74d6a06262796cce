use serde::{Deserialize, Serialize};

pub mod chart;
pub mod config;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod period;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use config::ApiConfig;
pub use controller::{Command, ExpenseApi, ExpenseController, ViewPort, SAVE_COOLDOWN_MS};
pub use error::{ApiError, ControllerError};
pub use period::Period;
pub use state::{ExpenseForm, ExpenseModal, FormField, ModalMode, Page, StatisticsState, ViewState};

/// Backend primary key of an expense row
pub type ExpenseId = i64;

/// Backend primary key of a category row
pub type CategoryId = i64;

/// An expense as returned by the backend.
///
/// The list endpoint sends `data` as `dd/mm/yyyy` while the single-expense
/// endpoint sends `yyyy-mm-dd`, so the raw string is kept as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Free-text description
    #[serde(rename = "descricao")]
    pub description: String,
    /// Signed amount; the backend stores expenses as negative values
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
    /// Joined category name, absent when the category was removed
    #[serde(rename = "categoria_nome", default)]
    pub category_name: Option<String>,
    /// Joined category color (`#rrggbb`)
    #[serde(rename = "categoria_cor", default)]
    pub category_color: Option<String>,
    #[serde(rename = "data")]
    pub date: String,
}

/// Expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Hex color string used for badges and chart segments
    #[serde(rename = "cor")]
    pub color: String,
}

/// Body sent when creating or updating an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    #[serde(rename = "descricao")]
    pub description: String,
    /// Amount as typed by the user; the backend stores it negated
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
    /// Storage format date (`yyyy-mm-dd`)
    #[serde(rename = "data")]
    pub date: String,
}

/// Response body of create/update/delete calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Present on create
    #[serde(default)]
    pub id: Option<ExpenseId>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `/estatisticas/total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: f64,
}

/// One row of `/estatisticas/por-categoria`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub id: CategoryId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cor")]
    pub color: String,
    /// Signed sum of the category's expenses for the period
    pub total: f64,
}

/// Response of the backend health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_deserializes_wire_names() {
        let json = r##"{
            "id": 7,
            "descricao": "Mercado",
            "valor": -120.5,
            "categoria_id": 2,
            "categoria_nome": "Alimentação",
            "categoria_cor": "#ff6384",
            "data": "07/03/2024"
        }"##;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.description, "Mercado");
        assert_eq!(expense.amount, -120.5);
        assert_eq!(expense.category_name.as_deref(), Some("Alimentação"));
        assert_eq!(expense.date, "07/03/2024");
    }

    #[test]
    fn test_expense_tolerates_missing_category_join() {
        let json = r#"{"id": 1, "descricao": "x", "valor": -1, "categoria_id": 9,
                       "categoria_nome": null, "data": "2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category_name, None);
        assert_eq!(expense.category_color, None);
    }

    #[test]
    fn test_payload_serializes_wire_names() {
        let payload = ExpensePayload {
            description: "Uber".to_string(),
            amount: 25.0,
            category_id: 3,
            date: "2024-03-07".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["descricao"], "Uber");
        assert_eq!(value["valor"], 25.0);
        assert_eq!(value["categoria_id"], 3);
        assert_eq!(value["data"], "2024-03-07");
    }

    #[test]
    fn test_mutation_response_accepts_create_and_delete_shapes() {
        let created: MutationResponse =
            serde_json::from_str(r#"{"id": 12, "message": "Despesa criada com sucesso"}"#).unwrap();
        assert_eq!(created.id, Some(12));

        let deleted: MutationResponse =
            serde_json::from_str(r#"{"message": "Despesa excluída com sucesso"}"#).unwrap();
        assert_eq!(deleted.id, None);
        assert!(deleted.message.is_some());
    }
}
