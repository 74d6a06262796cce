//! Render functions: pure projections of `ViewState` into what the pages show.

use crate::chart::EMPTY_MESSAGE;
use crate::format::{format_currency, format_date_display};
use crate::{ExpenseId, ViewState};

/// Badge color for expenses whose category is unknown
pub const FALLBACK_CATEGORY_COLOR: &str = "#6c757d";

/// Placeholder option of the category select
pub const CATEGORY_PLACEHOLDER: &str = "Selecione uma categoria";

/// One row of the expenses table
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    /// Magnitude in currency format
    pub amount_text: String,
    pub category_name: String,
    pub category_color: String,
    /// `dd/mm/yyyy`
    pub date_text: String,
}

/// Body of the expenses table
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseTableView {
    Empty { message: &'static str },
    Rows(Vec<ExpenseRow>),
}

pub fn render_expenses(state: &ViewState) -> ExpenseTableView {
    if state.expenses.is_empty() {
        return ExpenseTableView::Empty { message: EMPTY_MESSAGE };
    }

    let rows = state
        .expenses
        .iter()
        .map(|expense| {
            let category = state.category(expense.category_id);
            let category_name = expense
                .category_name
                .clone()
                .or_else(|| category.map(|c| c.name.clone()))
                .unwrap_or_else(|| "Sem categoria".to_string());
            let category_color = expense
                .category_color
                .clone()
                .or_else(|| category.map(|c| c.color.clone()))
                .unwrap_or_else(|| FALLBACK_CATEGORY_COLOR.to_string());

            ExpenseRow {
                id: expense.id,
                description: expense.description.clone(),
                amount_text: format_currency(expense.amount),
                category_name,
                category_color,
                date_text: format_date_display(&expense.date),
            }
        })
        .collect();

    ExpenseTableView::Rows(rows)
}

/// Total shown above the expenses table
pub fn expenses_total_text(state: &ViewState) -> String {
    format_currency(state.expenses_total())
}

/// Total shown on the statistics page
pub fn statistics_total_text(state: &ViewState) -> String {
    format_currency(state.statistics.total.unwrap_or(0.0))
}

/// Option of the category select
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub color: String,
}

pub fn category_options(state: &ViewState) -> Vec<CategoryOption> {
    state
        .categories
        .iter()
        .map(|category| CategoryOption {
            value: category.id.to_string(),
            label: category.name.clone(),
            color: category.color.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Expense};

    fn expense(id: ExpenseId, amount: f64, category_name: Option<&str>) -> Expense {
        Expense {
            id,
            description: format!("Despesa {}", id),
            amount,
            category_id: 1,
            category_name: category_name.map(str::to_string),
            category_color: category_name.map(|_| "#ff6384".to_string()),
            date: "2024-03-07".to_string(),
        }
    }

    #[test]
    fn test_empty_list_renders_message() {
        let state = ViewState::default();
        assert_eq!(
            render_expenses(&state),
            ExpenseTableView::Empty { message: "Nenhuma despesa encontrada" }
        );
        assert_eq!(expenses_total_text(&state), "R$ 0,00");
    }

    #[test]
    fn test_rows_show_magnitude_and_display_date() {
        let state = ViewState {
            expenses: vec![expense(1, -42.5, Some("Alimentação"))],
            ..ViewState::default()
        };
        match render_expenses(&state) {
            ExpenseTableView::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].amount_text, "R$ 42,50");
                assert_eq!(rows[0].date_text, "07/03/2024");
                assert_eq!(rows[0].category_name, "Alimentação");
                assert_eq!(rows[0].category_color, "#ff6384");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_join_falls_back_to_loaded_categories() {
        let state = ViewState {
            expenses: vec![expense(1, -10.0, None)],
            categories: vec![Category { id: 1, name: "Saúde".into(), color: "#4bc0c0".into() }],
            ..ViewState::default()
        };
        let ExpenseTableView::Rows(rows) = render_expenses(&state) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].category_name, "Saúde");
        assert_eq!(rows[0].category_color, "#4bc0c0");

        let state = ViewState { categories: vec![], ..state };
        let ExpenseTableView::Rows(rows) = render_expenses(&state) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].category_color, FALLBACK_CATEGORY_COLOR);
    }

    #[test]
    fn test_category_options() {
        let state = ViewState {
            categories: vec![Category { id: 4, name: "Lazer".into(), color: "#ffce56".into() }],
            ..ViewState::default()
        };
        let options = category_options(&state);
        assert_eq!(options[0].value, "4");
        assert_eq!(options[0].label, "Lazer");
    }
}
