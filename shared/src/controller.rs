//! # Expense Controller
//!
//! Owns the `ViewState` and turns every user action into one state
//! transition. The controller never touches the DOM: it talks to the backend
//! through an [`ExpenseApi`] and to the screen through a [`ViewPort`], which
//! receives a fresh snapshot after every change.
//!
//! ## Consistency
//! Every create/update/delete is followed by a full reload of the expense list
//! (and of the statistics when that page is active). There is no incremental
//! patching and no optimistic update.
//!
//! ## Concurrency
//! Everything runs on the UI thread. The state lives in a `RefCell` and is
//! never borrowed across an `.await`, so overlapping commands interleave
//! safely; whichever response arrives last wins.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{ApiError, ControllerError};
use crate::format::{format_amount_input, format_date_backend, storage_date};
use crate::state::{ExpenseForm, ExpenseModal, FormField, ModalMode, Page, ViewState};
use crate::{
    Category, CategoryId, CategoryTotal, Expense, ExpenseId, ExpensePayload, MutationResponse,
    Period, PingResponse, TotalResponse,
};

/// Delay before the save button is enabled again after a save completes
pub const SAVE_COOLDOWN_MS: u32 = 500;

pub const DELETE_CONFIRMATION: &str = "Tem certeza que deseja excluir esta despesa?";

const ALERT_SUFFIX: &str = "Verifique o console para mais detalhes.";

/// Backend operations used by the front end
#[async_trait(?Send)]
pub trait ExpenseApi {
    /// `None` and `Some(Period::All)` both request the unfiltered list
    async fn list_expenses(&self, period: Option<Period>) -> Result<Vec<Expense>, ApiError>;
    async fn get_expense(&self, id: ExpenseId) -> Result<Expense, ApiError>;
    async fn create_expense(&self, payload: &ExpensePayload) -> Result<MutationResponse, ApiError>;
    async fn update_expense(
        &self,
        id: ExpenseId,
        payload: &ExpensePayload,
    ) -> Result<MutationResponse, ApiError>;
    async fn delete_expense(&self, id: ExpenseId) -> Result<MutationResponse, ApiError>;
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn get_category(&self, id: CategoryId) -> Result<Category, ApiError>;
    async fn get_total(&self, period: Option<Period>) -> Result<TotalResponse, ApiError>;
    async fn get_totals_by_category(
        &self,
        period: Option<Period>,
    ) -> Result<Vec<CategoryTotal>, ApiError>;
    async fn ping(&self) -> Result<PingResponse, ApiError>;
}

/// Display surface the controller drives
#[async_trait(?Send)]
pub trait ViewPort {
    /// Called with the new state after every change
    fn render(&self, state: &ViewState);
    /// Blocking notification
    fn alert(&self, message: &str);
    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;
    fn today(&self) -> NaiveDate;
    async fn cooldown(&self, millis: u32);
}

/// A discrete user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// First load; the page comes from the URL hash or defaults to expenses
    Init(Page),
    Navigate(Page),
    SelectPeriod(Period),
    SelectStatisticsPeriod(Period),
    OpenCreate,
    OpenEdit(ExpenseId),
    EditField(FormField, String),
    CloseModal,
    Save,
    Delete(ExpenseId),
    HighlightCategory(Option<CategoryId>),
    CheckConnection,
}

pub struct ExpenseController<A, V> {
    api: A,
    view: V,
    state: RefCell<ViewState>,
}

impl<A: ExpenseApi, V: ViewPort> ExpenseController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: RefCell::new(ViewState::default()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Run one command to completion.
    ///
    /// Failures have already been logged and shown to the user when this
    /// returns `Err`; the error is handed back so callers can run cleanup.
    pub async fn dispatch(&self, command: Command) -> Result<(), ControllerError> {
        log::debug!("dispatch {:?}", command);
        match command {
            Command::Init(page) => self.init(page).await,
            Command::Navigate(page) => self.navigate(page).await,
            Command::SelectPeriod(period) => self.select_period(period).await,
            Command::SelectStatisticsPeriod(period) => self.select_statistics_period(period).await,
            Command::OpenCreate => {
                self.open_create_modal();
                Ok(())
            }
            Command::OpenEdit(id) => self.open_edit_modal(id).await,
            Command::EditField(field, value) => {
                self.edit_field(field, value);
                Ok(())
            }
            Command::CloseModal => {
                self.close_modal();
                Ok(())
            }
            Command::Save => self.submit_save().await,
            Command::Delete(id) => self.confirm_delete(id).await,
            Command::HighlightCategory(category) => {
                self.highlight_category(category);
                Ok(())
            }
            Command::CheckConnection => {
                self.check_connection().await;
                Ok(())
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut ViewState)) {
        {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
        }
        self.view.render(&self.state.borrow());
    }

    fn report(&self, message: &str, error: &ApiError) {
        log::error!("{} {}", message, error);
        self.view.alert(&format!("{} {}", message, ALERT_SUFFIX));
    }

    /// Load categories and expenses, then show the initial page
    pub async fn init(&self, page: Page) -> Result<(), ControllerError> {
        log::info!("initializing on page {}", page.slug());
        let categories = self.load_categories().await;
        let expenses = self.load_expenses().await;

        self.update(|state| state.page = page);
        let statistics = match page {
            Page::Statistics => self.load_statistics().await,
            Page::Expenses => Ok(()),
        };

        categories.and(expenses).and(statistics)
    }

    /// Activate `page` and load its data
    pub async fn navigate(&self, page: Page) -> Result<(), ControllerError> {
        self.update(|state| state.page = page);
        match page {
            Page::Expenses => self.load_expenses().await,
            Page::Statistics => self.load_statistics().await,
        }
    }

    pub async fn select_period(&self, period: Period) -> Result<(), ControllerError> {
        self.update(|state| state.period = period);
        self.load_expenses().await
    }

    pub async fn select_statistics_period(&self, period: Period) -> Result<(), ControllerError> {
        self.update(|state| state.statistics_period = period);
        self.load_statistics().await
    }

    pub async fn load_categories(&self) -> Result<(), ControllerError> {
        match self.api.list_categories().await {
            Ok(categories) => {
                log::info!("loaded {} categories", categories.len());
                self.update(|state| state.categories = categories);
                Ok(())
            }
            Err(error) => {
                self.report("Erro ao carregar categorias.", &error);
                Err(error.into())
            }
        }
    }

    /// Replace the expense list with the backend's list for the current filter
    pub async fn load_expenses(&self) -> Result<(), ControllerError> {
        let period = self.state.borrow().period;
        match self.api.list_expenses(Some(period)).await {
            Ok(expenses) => {
                log::info!("loaded {} expenses for {}", expenses.len(), period);
                self.update(|state| state.expenses = expenses);
                Ok(())
            }
            Err(error) => {
                self.report("Erro ao carregar despesas.", &error);
                Err(error.into())
            }
        }
    }

    /// Fetch the total and the per-category breakdown concurrently.
    ///
    /// Each half updates its own part of the page; one failing does not stop
    /// the other.
    pub async fn load_statistics(&self) -> Result<(), ControllerError> {
        let period = self.state.borrow().statistics_period;

        let total = async {
            match self.api.get_total(Some(period)).await {
                Ok(response) => {
                    self.update(|state| state.statistics.total = Some(response.total));
                    Ok(())
                }
                Err(error) => {
                    self.report("Erro ao carregar total de despesas.", &error);
                    Err(error)
                }
            }
        };

        let by_category = async {
            match self.api.get_totals_by_category(Some(period)).await {
                Ok(data) => {
                    self.update(|state| {
                        state.statistics.by_category = Some(data);
                        state.statistics.highlighted = None;
                        state.statistics.chart_generation += 1;
                    });
                    Ok(())
                }
                Err(error) => {
                    self.report("Erro ao carregar despesas por categoria.", &error);
                    Err(error)
                }
            }
        };

        let (total, by_category) = tokio::join!(total, by_category);
        total.and(by_category).map_err(ControllerError::from)
    }

    pub fn open_create_modal(&self) {
        let form = ExpenseForm {
            date: storage_date(self.view.today()),
            ..ExpenseForm::default()
        };
        self.update(|state| {
            state.modal = Some(ExpenseModal {
                mode: ModalMode::Create,
                form,
            })
        });
    }

    /// Fetch the expense and open the form with its values
    pub async fn open_edit_modal(&self, id: ExpenseId) -> Result<(), ControllerError> {
        let expense = match self.api.get_expense(id).await {
            Ok(expense) => expense,
            Err(error) => {
                self.report("Erro ao obter despesa para edição.", &error);
                return Err(error.into());
            }
        };

        let form = ExpenseForm {
            id: expense.id.to_string(),
            description: expense.description,
            amount: format_amount_input(expense.amount),
            category_id: expense.category_id.to_string(),
            date: format_date_backend(&expense.date).unwrap_or(expense.date),
        };
        self.update(|state| {
            state.modal = Some(ExpenseModal {
                mode: ModalMode::Edit(id),
                form,
            })
        });
        Ok(())
    }

    pub fn edit_field(&self, field: FormField, value: String) {
        self.update(|state| {
            if let Some(modal) = state.modal.as_mut() {
                modal.form.set(field, value);
            }
        });
    }

    /// Close the modal and discard the form
    pub fn close_modal(&self) {
        self.update(|state| state.modal = None);
    }

    /// Save with the button locked until the cooldown after completion.
    ///
    /// A save requested while one is in flight is ignored.
    pub async fn submit_save(&self) -> Result<(), ControllerError> {
        if self.state.borrow().saving {
            log::debug!("save already in progress");
            return Ok(());
        }

        self.update(|state| state.saving = true);
        let result = self.save_expense().await;
        self.view.cooldown(SAVE_COOLDOWN_MS).await;
        self.update(|state| state.saving = false);
        result
    }

    /// Validate the open form and create or update the expense
    pub async fn save_expense(&self) -> Result<(), ControllerError> {
        let form = self
            .state
            .borrow()
            .modal
            .as_ref()
            .map(|modal| modal.form.clone())
            .ok_or(ControllerError::NoOpenForm)?;

        let (id, payload) = match validate_form(&form) {
            Ok(validated) => validated,
            Err(error) => {
                log::warn!("expense form rejected: {}", error);
                self.view.alert(&error.to_string());
                return Err(error);
            }
        };

        let outcome = match id {
            Some(id) => self.api.update_expense(id, &payload).await,
            None => self.api.create_expense(&payload).await,
        };

        match outcome {
            Ok(_) => {
                self.close_modal();
                self.reload_after_mutation().await;
                Ok(())
            }
            Err(error) => {
                self.report("Erro ao salvar despesa.", &error);
                Err(error.into())
            }
        }
    }

    /// Ask for confirmation, then delete and reload
    pub async fn confirm_delete(&self, id: ExpenseId) -> Result<(), ControllerError> {
        if !self.view.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }

        match self.api.delete_expense(id).await {
            Ok(_) => {
                log::info!("deleted expense {}", id);
                self.reload_after_mutation().await;
                Ok(())
            }
            Err(error) => {
                self.report("Erro ao excluir despesa.", &error);
                Err(error.into())
            }
        }
    }

    // Reload failures are reported by the loaders and do not undo the mutation.
    async fn reload_after_mutation(&self) {
        let _ = self.load_expenses().await;
        if self.state.borrow().page == Page::Statistics {
            let _ = self.load_statistics().await;
        }
    }

    pub fn highlight_category(&self, category: Option<CategoryId>) {
        self.update(|state| state.statistics.highlighted = category);
    }

    /// Ping the backend and record whether it answered
    pub async fn check_connection(&self) {
        let online = match self.api.ping().await {
            Ok(_) => true,
            Err(error) => {
                log::warn!("backend health check failed: {}", error);
                false
            }
        };
        self.update(|state| state.backend_online = Some(online));
    }
}

/// Turn the raw form into a payload, rejecting empty or unparsable fields
pub fn validate_form(
    form: &ExpenseForm,
) -> Result<(Option<ExpenseId>, ExpensePayload), ControllerError> {
    let required = [
        FormField::Description,
        FormField::Amount,
        FormField::Category,
        FormField::Date,
    ];
    if required.iter().any(|field| form.get(*field).trim().is_empty()) {
        return Err(ControllerError::MissingFields);
    }

    let amount = form
        .amount
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(ControllerError::Validation("valor"))?;
    let category_id = form
        .category_id
        .trim()
        .parse::<CategoryId>()
        .map_err(|_| ControllerError::Validation("categoria"))?;
    let date = format_date_backend(&form.date)
        .ok_or_else(|| ControllerError::InvalidDate(form.date.clone()))?;
    let id = match form.id.trim() {
        "" => None,
        raw => Some(
            raw.parse::<ExpenseId>()
                .map_err(|_| ControllerError::Validation("id"))?,
        ),
    };

    Ok((
        id,
        ExpensePayload {
            description: form.description.trim().to_string(),
            amount,
            category_id,
            date,
        },
    ))
}
