//! Доменные модели: входные долги и помесячный график погашения.

use crate::error::{PayoffError, Result};
use serde::{Deserialize, Serialize};

/// Долг в том виде, в каком его передаёт вызывающая сторона.
/// Движок его не меняет: на время расчёта делается собственная копия.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub balance: f64,
    /// Годовая номинальная ставка в процентах (12.0 == 12%).
    pub interest_rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
        }
    }
}

/// Платёж по одному долгу за один месяц.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPaymentRecord {
    pub debt_id: String,
    pub amount: f64,
    pub remaining_balance: f64,
    pub is_paid_off: bool,
}

/// Состояние плана после одного месяца. `payments` идут в порядке входных долгов.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub month: u32,
    pub payments: Vec<MonthlyPaymentRecord>,
    pub total_remaining: f64,
    pub total_paid: f64,
    pub total_interest_paid: f64,
}

impl MonthSnapshot {
    pub fn payment_for(&self, debt_id: &str) -> Option<&MonthlyPaymentRecord> {
        self.payments.iter().find(|p| p.debt_id == debt_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Все долги погашены.
    PaidOff,
    /// Достигнут предел итераций, часть долгов осталась.
    CapReached,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub months: Vec<MonthSnapshot>,
    pub outcome: Outcome,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn converged(&self) -> bool {
        self.outcome == Outcome::PaidOff
    }

    pub fn last(&self) -> Option<&MonthSnapshot> {
        self.months.last()
    }

    pub fn total_paid(&self) -> f64 {
        self.last().map_or(0.0, |m| m.total_paid)
    }

    pub fn total_interest_paid(&self) -> f64 {
        self.last().map_or(0.0, |m| m.total_interest_paid)
    }

    /// Первый месяц, в котором долг отмечен погашенным.
    pub fn payoff_month(&self, debt_id: &str) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.payment_for(debt_id).is_some_and(|p| p.is_paid_off))
            .map(|m| m.month)
    }

    /// Превращает незавершённый план в ошибку `NonConvergent`.
    pub fn require_payoff(self) -> Result<Schedule> {
        match self.outcome {
            Outcome::PaidOff => Ok(self),
            Outcome::CapReached => Err(PayoffError::NonConvergent {
                months: self.months.len() as u32,
            }),
        }
    }
}
