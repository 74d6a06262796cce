//! URL construction for the backend REST surface.

use crate::{CategoryId, ExpenseId, Period};

fn with_period(url: String, period: Option<Period>) -> String {
    match period.and_then(|p| p.query_value()) {
        Some(value) => format!("{}?periodo={}", url, value),
        None => url,
    }
}

/// `GET /despesas/` (also the `POST` target)
pub fn expenses(base_url: &str, period: Option<Period>) -> String {
    with_period(format!("{}/despesas/", base_url), period)
}

/// `GET|PUT|DELETE /despesas/{id}`
pub fn expense(base_url: &str, id: ExpenseId) -> String {
    format!("{}/despesas/{}", base_url, id)
}

pub fn categories(base_url: &str) -> String {
    format!("{}/categorias/", base_url)
}

pub fn category(base_url: &str, id: CategoryId) -> String {
    format!("{}/categorias/{}", base_url, id)
}

pub fn statistics_total(base_url: &str, period: Option<Period>) -> String {
    with_period(format!("{}/estatisticas/total", base_url), period)
}

pub fn statistics_by_category(base_url: &str, period: Option<Period>) -> String {
    with_period(format!("{}/estatisticas/por-categoria", base_url), period)
}

/// Health check, served at the server root rather than under `/api`
pub fn ping(server_root: &str) -> String {
    format!("{}/ping", server_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000/api";

    #[test]
    fn test_all_period_omits_query() {
        assert_eq!(expenses(BASE, Some(Period::All)), "http://localhost:5000/api/despesas/");
        assert_eq!(expenses(BASE, None), "http://localhost:5000/api/despesas/");
        assert_eq!(statistics_total(BASE, Some(Period::All)), "http://localhost:5000/api/estatisticas/total");
    }

    #[test]
    fn test_filters_append_exact_value() {
        let cases = [
            (Period::Daily, "diario"),
            (Period::Weekly, "semanal"),
            (Period::Monthly, "mensal"),
            (Period::Yearly, "anual"),
        ];
        for (period, value) in cases {
            let url = expenses(BASE, Some(period));
            assert_eq!(url, format!("{}/despesas/?periodo={}", BASE, value));
            assert_eq!(url.matches("periodo=").count(), 1);

            let url = statistics_by_category(BASE, Some(period));
            assert!(url.ends_with(&format!("/estatisticas/por-categoria?periodo={}", value)));
        }
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(expense(BASE, 42), "http://localhost:5000/api/despesas/42");
        assert_eq!(categories(BASE), "http://localhost:5000/api/categorias/");
        assert_eq!(category(BASE, 3), "http://localhost:5000/api/categorias/3");
        assert_eq!(ping("http://localhost:5000"), "http://localhost:5000/ping");
    }
}
