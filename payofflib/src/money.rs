//! Перевод сумм между текстом (Decimal) и движком (f64).

use crate::error::{PayoffError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Округление до копеек для вывода.
pub fn to_cents(amount: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(amount)
        .map(|d| d.round_dp(2))
        .ok_or(PayoffError::AmountOutOfRange(amount))
}

/// Разбор суммы из текстового поля.
pub fn parse_amount(field: &str, s: &str) -> Result<f64> {
    let d: Decimal = s
        .trim()
        .parse()
        .map_err(|e| PayoffError::Parse(format!("{field}: {e}")))?;
    from_decimal(field, d)
}

pub fn from_decimal(field: &str, d: Decimal) -> Result<f64> {
    d.to_f64()
        .ok_or_else(|| PayoffError::Parse(format!("{field}: {d} does not fit f64")))
}
