//! payofflib — расчёт помесячного графика погашения долгов (avalanche, snowball и др.)
//! с чтением/записью в CSV, JSON и XML.

pub mod engine;
pub mod error;
pub mod model;
pub mod money;
pub mod strategy;
pub mod summary;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod xml;
}

pub use engine::{check_budget, compute_schedule, MAX_MONTHS};
pub use error::{PayoffError, Result};
pub use model::{Debt, MonthSnapshot, MonthlyPaymentRecord, Outcome, Schedule};
pub use strategy::Strategy;
pub use summary::{build_report, compare_strategies, PlanSummary, Report};
