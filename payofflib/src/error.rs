//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Сумма не представима в Decimal при выводе (NaN, бесконечность, переполнение).
    #[error("Amount out of range for output: {0}")]
    AmountOutOfRange(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Бюджет меньше суммы минимальных платежей. Движок это не проверяет,
    /// ошибку возвращает только `engine::check_budget`.
    #[error("Budget {budget} is below the total minimum payment {required}")]
    InfeasibleBudget { budget: f64, required: f64 },

    #[error("Plan does not pay off within {months} months")]
    NonConvergent { months: u32 },
}

pub type Result<T> = std::result::Result<T, PayoffError>;
