//! Помесячная симуляция погашения.
//!
//! Каждый месяц по всем долгам вносится минимальный платёж (с начислением
//! процентов), затем остаток бюджета целиком уходит в тело одного долга,
//! выбранного стратегией. Расчёт идёт до полного погашения или до
//! `MAX_MONTHS`.

use crate::{
    error::{PayoffError, Result},
    model::{Debt, MonthSnapshot, MonthlyPaymentRecord, Outcome, Schedule},
    strategy::Strategy,
};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

/// Жёсткий предел итераций: 50 лет.
pub const MAX_MONTHS: u32 = 600;

/// Рабочая копия долга на время одного расчёта.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingDebt {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub interest_rate: f64,
    pub minimum_payment: f64,
    pub remaining_balance: f64,
    pub is_paid_off: bool,
}

impl WorkingDebt {
    pub fn new(debt: &Debt) -> Self {
        Self {
            id: debt.id.clone(),
            name: debt.name.clone(),
            balance: debt.balance,
            interest_rate: debt.interest_rate,
            minimum_payment: debt.minimum_payment,
            remaining_balance: debt.balance,
            is_paid_off: false,
        }
    }

    pub fn monthly_interest(&self) -> f64 {
        self.remaining_balance * (self.interest_rate / 100.0 / 12.0)
    }

    /// Минимальный платёж за месяц. Возвращает `(платёж, из него проценты)`.
    ///
    /// Платёж не больше `остаток + проценты`; в этом случае тело гасится
    /// ровно на остаток, чтобы баланс стал точно нулём.
    fn apply_minimum_payment(&mut self) -> (f64, f64) {
        let interest = self.monthly_interest();
        let payoff_amount = self.remaining_balance + interest;

        let (payment, principal) = if self.minimum_payment >= payoff_amount {
            (payoff_amount, self.remaining_balance)
        } else {
            let payment = self.minimum_payment;
            (payment, (payment - interest).max(0.0))
        };

        self.reduce(principal);
        (payment, payment - principal)
    }

    /// Доплата в тело долга без процентной части. Возвращает внесённую сумму.
    fn apply_extra_payment(&mut self, available: f64) -> f64 {
        let extra = available.min(self.remaining_balance);
        self.reduce(extra);
        extra
    }

    fn reduce(&mut self, principal: f64) {
        self.remaining_balance = (self.remaining_balance - principal).max(0.0);
        if self.remaining_balance == 0.0 {
            self.is_paid_off = true;
        }
    }

    fn record(&self, amount: f64) -> MonthlyPaymentRecord {
        MonthlyPaymentRecord {
            debt_id: self.id.clone(),
            amount,
            remaining_balance: self.remaining_balance,
            is_paid_off: self.is_paid_off,
        }
    }
}

/// Проверка входа: непустой список, конечные неотрицательные суммы, уникальные id.
pub fn validate_debts(debts: &[Debt]) -> Result<()> {
    if debts.is_empty() {
        return Err(PayoffError::InvalidInput("debt list is empty".into()));
    }

    let mut seen = HashSet::with_capacity(debts.len());
    for d in debts {
        for (field, value) in [
            ("balance", d.balance),
            ("interest rate", d.interest_rate),
            ("minimum payment", d.minimum_payment),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PayoffError::InvalidInput(format!(
                    "debt {}: {field} must be a non-negative number, got {value}",
                    d.id
                )));
            }
        }
        if !seen.insert(d.id.as_str()) {
            return Err(PayoffError::InvalidInput(format!("duplicate debt id: {}", d.id)));
        }
    }
    Ok(())
}

pub fn total_minimum_payment(debts: &[Debt]) -> f64 {
    debts.iter().map(|d| d.minimum_payment).sum()
}

/// Предусловие вызывающей стороны: бюджет покрывает все минимальные платежи.
pub fn check_budget(debts: &[Debt], monthly_budget: f64) -> Result<()> {
    let required = total_minimum_payment(debts);
    if monthly_budget.is_nan() || monthly_budget < required {
        return Err(PayoffError::InfeasibleBudget {
            budget: monthly_budget,
            required,
        });
    }
    Ok(())
}

/// Строит полный график погашения.
///
/// Достаточность бюджета здесь не проверяется (см. [`check_budget`]).
/// Если за `MAX_MONTHS` долги не погашены, возвращается частичный график
/// с `Outcome::CapReached`.
pub fn compute_schedule(debts: &[Debt], monthly_budget: f64, strategy: Strategy) -> Result<Schedule> {
    validate_debts(debts)?;
    if !monthly_budget.is_finite() || monthly_budget < 0.0 {
        return Err(PayoffError::InvalidInput(format!(
            "monthly budget must be a non-negative number, got {monthly_budget}"
        )));
    }

    debug!(debts = debts.len(), monthly_budget, %strategy, "computing payoff schedule");

    let mut working: Vec<WorkingDebt> = debts.iter().map(WorkingDebt::new).collect();
    let mut months = Vec::new();
    let mut total_paid = 0.0;
    let mut total_interest_paid = 0.0;
    let mut month: u32 = 1;

    while month <= MAX_MONTHS && working.iter().any(|d| !d.is_paid_off) {
        let mut payments = Vec::with_capacity(working.len());
        let mut spent = 0.0;

        for debt in working.iter_mut() {
            if debt.is_paid_off {
                payments.push(debt.record(0.0));
                continue;
            }
            let (payment, interest) = debt.apply_minimum_payment();
            spent += payment;
            total_paid += payment;
            total_interest_paid += interest;
            payments.push(debt.record(payment));
        }

        let remaining_budget = monthly_budget - spent;
        if remaining_budget > 0.0 {
            if let Some(idx) = strategy.select_target(&working) {
                let target = &mut working[idx];
                let extra = target.apply_extra_payment(remaining_budget);
                total_paid += extra;
                trace!(month, debt = %target.id, extra, "extra payment");

                let rec = &mut payments[idx];
                rec.amount += extra;
                rec.remaining_balance = target.remaining_balance;
                rec.is_paid_off = target.is_paid_off;
            }
        }

        months.push(MonthSnapshot {
            month,
            payments,
            total_remaining: working.iter().map(|d| d.remaining_balance).sum(),
            total_paid,
            total_interest_paid,
        });
        month += 1;
    }

    let outcome = if working.iter().all(|d| d.is_paid_off) {
        info!(months = months.len(), total_paid, total_interest_paid, "all debts paid off");
        Outcome::PaidOff
    } else {
        warn!(
            months = months.len(),
            unpaid = working.iter().filter(|d| !d.is_paid_off).count(),
            "iteration cap reached before payoff"
        );
        Outcome::CapReached
    };

    Ok(Schedule { months, outcome })
}
