use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::endpoints;
use shared::{
    ApiConfig, ApiError, Category, CategoryId, CategoryTotal, Expense, ExpenseApi, ExpenseId,
    ExpensePayload, MutationResponse, Period, PingResponse, TotalResponse,
};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the backend resolved from the page location
    pub fn new() -> Self {
        Self {
            config: super::config::load(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network { context, message: e.to_string() })?;
        Self::decode(response, context).await
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        context: &'static str,
    ) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::Status { context, status: response.status() });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode { context, message: e.to_string() })
    }
}

#[async_trait(?Send)]
impl ExpenseApi for ApiClient {
    async fn list_expenses(&self, period: Option<Period>) -> Result<Vec<Expense>, ApiError> {
        let url = endpoints::expenses(self.base_url(), period);
        self.get_json(&url, "obter despesas").await
    }

    async fn get_expense(&self, id: ExpenseId) -> Result<Expense, ApiError> {
        let url = endpoints::expense(self.base_url(), id);
        self.get_json(&url, "obter despesa").await
    }

    async fn create_expense(&self, payload: &ExpensePayload) -> Result<MutationResponse, ApiError> {
        let context = "criar despesa";
        let url = endpoints::expenses(self.base_url(), None);

        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Encode { context, message: e.to_string() })?
            .send()
            .await
            .map_err(|e| ApiError::Network { context, message: e.to_string() })?;
        Self::decode(response, context).await
    }

    async fn update_expense(
        &self,
        id: ExpenseId,
        payload: &ExpensePayload,
    ) -> Result<MutationResponse, ApiError> {
        let context = "atualizar despesa";
        let url = endpoints::expense(self.base_url(), id);

        let response = Request::put(&url)
            .json(payload)
            .map_err(|e| ApiError::Encode { context, message: e.to_string() })?
            .send()
            .await
            .map_err(|e| ApiError::Network { context, message: e.to_string() })?;
        Self::decode(response, context).await
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<MutationResponse, ApiError> {
        let context = "excluir despesa";
        let url = endpoints::expense(self.base_url(), id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network { context, message: e.to_string() })?;
        Self::decode(response, context).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = endpoints::categories(self.base_url());
        self.get_json(&url, "obter categorias").await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, ApiError> {
        let url = endpoints::category(self.base_url(), id);
        self.get_json(&url, "obter categoria").await
    }

    async fn get_total(&self, period: Option<Period>) -> Result<TotalResponse, ApiError> {
        let url = endpoints::statistics_total(self.base_url(), period);
        self.get_json(&url, "obter total de despesas").await
    }

    async fn get_totals_by_category(
        &self,
        period: Option<Period>,
    ) -> Result<Vec<CategoryTotal>, ApiError> {
        let url = endpoints::statistics_by_category(self.base_url(), period);
        self.get_json(&url, "obter despesas por categoria").await
    }

    async fn ping(&self) -> Result<PingResponse, ApiError> {
        let url = endpoints::ping(self.config.server_root());
        self.get_json(&url, "verificar conexão").await
    }
}
