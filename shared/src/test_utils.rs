//! In-memory doubles for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::controller::{ExpenseApi, ViewPort};
use crate::{
    ApiError, Category, CategoryId, CategoryTotal, Expense, ExpenseId, ExpensePayload,
    MutationResponse, Period, PingResponse, TotalResponse, ViewState,
};

/// Fixed "today" reported by `RecordingView`
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

pub fn expense(id: ExpenseId, amount: f64, date: &str) -> Expense {
    Expense {
        id,
        description: format!("Despesa {}", id),
        amount,
        category_id: 1,
        category_name: Some("Alimentação".to_string()),
        category_color: Some("#ff6384".to_string()),
        date: date.to_string(),
    }
}

pub fn category_total(id: CategoryId, total: f64) -> CategoryTotal {
    CategoryTotal {
        id,
        name: format!("Categoria {}", id),
        color: "#36a2eb".to_string(),
        total,
    }
}

/// A backend call as seen by `RecordingApi`
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListExpenses(Option<Period>),
    GetExpense(ExpenseId),
    Create(ExpensePayload),
    Update(ExpenseId, ExpensePayload),
    Delete(ExpenseId),
    ListCategories,
    GetCategory(CategoryId),
    GetTotal(Option<Period>),
    GetTotalsByCategory(Option<Period>),
    Ping,
}

/// Backend double that records every call and serves canned data
#[derive(Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<ApiCall>>,
    expenses: RefCell<HashMap<Period, Vec<Expense>>>,
    totals_by_category: RefCell<Vec<CategoryTotal>>,
    failing: RefCell<HashSet<&'static str>>,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn set_expenses(&self, period: Period, expenses: Vec<Expense>) {
        self.expenses.borrow_mut().insert(period, expenses);
    }

    pub fn set_totals_by_category(&self, data: Vec<CategoryTotal>) {
        *self.totals_by_category.borrow_mut() = data;
    }

    /// Make the named operation answer with HTTP 500 from now on
    pub fn fail(&self, operation: &'static str) {
        self.failing.borrow_mut().insert(operation);
    }

    fn record(&self, call: ApiCall, operation: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(operation) {
            Err(ApiError::Status { context: operation, status: 500 })
        } else {
            Ok(())
        }
    }

    fn message(text: &str) -> MutationResponse {
        MutationResponse {
            message: Some(text.to_string()),
            ..MutationResponse::default()
        }
    }
}

#[async_trait(?Send)]
impl ExpenseApi for RecordingApi {
    async fn list_expenses(&self, period: Option<Period>) -> Result<Vec<Expense>, ApiError> {
        self.record(ApiCall::ListExpenses(period), "list_expenses")?;
        let key = period.unwrap_or_default();
        Ok(self.expenses.borrow().get(&key).cloned().unwrap_or_default())
    }

    async fn get_expense(&self, id: ExpenseId) -> Result<Expense, ApiError> {
        self.record(ApiCall::GetExpense(id), "get_expense")?;
        Ok(expense(id, -42.5, "2024-03-07"))
    }

    async fn create_expense(&self, payload: &ExpensePayload) -> Result<MutationResponse, ApiError> {
        self.record(ApiCall::Create(payload.clone()), "create_expense")?;
        Ok(MutationResponse {
            id: Some(100),
            ..Self::message("Despesa criada com sucesso")
        })
    }

    async fn update_expense(
        &self,
        id: ExpenseId,
        payload: &ExpensePayload,
    ) -> Result<MutationResponse, ApiError> {
        self.record(ApiCall::Update(id, payload.clone()), "update_expense")?;
        Ok(Self::message("Despesa atualizada com sucesso"))
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<MutationResponse, ApiError> {
        self.record(ApiCall::Delete(id), "delete_expense")?;
        Ok(Self::message("Despesa excluída com sucesso"))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record(ApiCall::ListCategories, "list_categories")?;
        Ok(vec![
            Category { id: 1, name: "Alimentação".into(), color: "#ff6384".into() },
            Category { id: 2, name: "Transporte".into(), color: "#36a2eb".into() },
        ])
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.record(ApiCall::GetCategory(id), "get_category")?;
        Ok(Category { id, name: "Alimentação".into(), color: "#ff6384".into() })
    }

    async fn get_total(&self, period: Option<Period>) -> Result<TotalResponse, ApiError> {
        self.record(ApiCall::GetTotal(period), "get_total")?;
        Ok(TotalResponse { total: -150.0 })
    }

    async fn get_totals_by_category(
        &self,
        period: Option<Period>,
    ) -> Result<Vec<CategoryTotal>, ApiError> {
        self.record(ApiCall::GetTotalsByCategory(period), "get_totals_by_category")?;
        Ok(self.totals_by_category.borrow().clone())
    }

    async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.record(ApiCall::Ping, "ping")?;
        Ok(PingResponse { message: "pong".into() })
    }
}

/// Display double recording prompts, renders, and cooldowns
#[derive(Default)]
pub struct RecordingView {
    last_state: RefCell<Option<ViewState>>,
    renders: Cell<usize>,
    alerts: RefCell<Vec<String>>,
    confirmations: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
    cooldowns: RefCell<Vec<u32>>,
}

impl RecordingView {
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn cooldowns(&self) -> Vec<u32> {
        self.cooldowns.borrow().clone()
    }

    pub fn last_state(&self) -> Option<ViewState> {
        self.last_state.borrow().clone()
    }

    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

#[async_trait(?Send)]
impl ViewPort for RecordingView {
    fn render(&self, state: &ViewState) {
        self.renders.set(self.renders.get() + 1);
        *self.last_state.borrow_mut() = Some(state.clone());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn today(&self) -> NaiveDate {
        today()
    }

    async fn cooldown(&self, millis: u32) {
        self.cooldowns.borrow_mut().push(millis);
    }
}
