//! # View State
//!
//! In-memory mirror of what the backend returned plus the UI-only bits the
//! pages need (open modal, save button lock, chart highlight). Nothing here is
//! authoritative: every mutation is followed by a full reload.

use crate::{Category, CategoryId, CategoryTotal, Expense, ExpenseId, Period};

/// Top-level pages reachable from the sidebar and the URL hash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Expenses,
    Statistics,
}

impl Page {
    /// Hash fragment / DOM id prefix of the page
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Expenses => "despesas",
            Page::Statistics => "estatisticas",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Expenses => "Despesas",
            Page::Statistics => "Estatísticas",
        }
    }

    /// Parse a location hash (`#estatisticas`, with or without the `#`)
    pub fn from_hash(hash: &str) -> Option<Page> {
        match hash.trim_start_matches('#') {
            "despesas" => Some(Page::Expenses),
            "estatisticas" => Some(Page::Statistics),
            _ => None,
        }
    }

    /// Whether `hash` already names this page, in which case following the
    /// page's link does not fire a hash change
    pub fn is_current(&self, hash: &str) -> bool {
        Page::from_hash(hash) == Some(*self)
    }
}

/// Whether the expense modal creates or edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(ExpenseId),
}

impl ModalMode {
    pub fn title(&self) -> &'static str {
        match self {
            ModalMode::Create => "Nova Despesa",
            ModalMode::Edit(_) => "Editar Despesa",
        }
    }
}

/// Fields of the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
    Date,
}

/// Raw values of the expense form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    /// Empty for a new expense
    pub id: String,
    pub description: String,
    pub amount: String,
    pub category_id: String,
    /// `yyyy-mm-dd`, as produced by a date input
    pub date: String,
}

impl ExpenseForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Description => self.description = value,
            FormField::Amount => self.amount = value,
            FormField::Category => self.category_id = value,
            FormField::Date => self.date = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
            FormField::Category => &self.category_id,
            FormField::Date => &self.date,
        }
    }
}

/// Open expense modal
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseModal {
    pub mode: ModalMode,
    pub form: ExpenseForm,
}

/// Data shown on the statistics page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsState {
    /// Signed total for the period; `None` until loaded
    pub total: Option<f64>,
    /// Per-category totals; `None` until loaded
    pub by_category: Option<Vec<CategoryTotal>>,
    /// Category hovered in the list, emphasized in the chart
    pub highlighted: Option<CategoryId>,
    /// Bumped on every breakdown reload so the chart is rebuilt
    pub chart_generation: u64,
}

/// Everything the pages render from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    /// Filter of the expenses page
    pub period: Period,
    /// Filter of the statistics page
    pub statistics_period: Period,
    pub page: Page,
    pub modal: Option<ExpenseModal>,
    /// Save button disabled while a save runs and during its cooldown
    pub saving: bool,
    pub statistics: StatisticsState,
    /// Result of the last health check; `None` before the first one
    pub backend_online: Option<bool>,
}

impl ViewState {
    /// Signed sum of the loaded expenses
    pub fn expenses_total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}
