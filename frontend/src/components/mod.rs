pub mod connection_status;
pub mod expenses;
pub mod period_tabs;
pub mod sidebar;
pub mod statistics;

pub use expenses::ExpensesPage;
pub use sidebar::Sidebar;
pub use statistics::StatisticsPage;
