//! Итоговые показатели плана и сравнение стратегий.

use crate::{
    engine::compute_schedule,
    error::Result,
    model::{Debt, Schedule},
    strategy::Strategy,
};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub debt_id: String,
    pub name: String,
    pub payoff_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub strategy: Strategy,
    pub monthly_budget: f64,
    pub total_months: u32,
    pub total_paid: f64,
    pub total_interest_paid: f64,
    pub converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub debts: Vec<DebtPayoff>,
}

/// План целиком: сводка плюс помесячный график.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub summary: PlanSummary,
    pub schedule: Schedule,
}

/// Календарный месяц, соответствующий номеру месяца плана (1 == `start`).
pub fn payoff_date(start: NaiveDate, month: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(month.checked_sub(1)?))
}

pub fn summarize(
    debts: &[Debt],
    schedule: &Schedule,
    strategy: Strategy,
    monthly_budget: f64,
    start_date: Option<NaiveDate>,
) -> PlanSummary {
    let debts = debts
        .iter()
        .map(|d| {
            let payoff_month = schedule.payoff_month(&d.id);
            DebtPayoff {
                debt_id: d.id.clone(),
                name: d.name.clone(),
                payoff_month,
                payoff_date: start_date.zip(payoff_month).and_then(|(s, m)| payoff_date(s, m)),
            }
        })
        .collect();

    PlanSummary {
        strategy,
        monthly_budget,
        total_months: schedule.len() as u32,
        total_paid: schedule.total_paid(),
        total_interest_paid: schedule.total_interest_paid(),
        converged: schedule.converged(),
        start_date,
        debts,
    }
}

pub fn build_report(
    debts: &[Debt],
    monthly_budget: f64,
    strategy: Strategy,
    start_date: Option<NaiveDate>,
) -> Result<Report> {
    let schedule = compute_schedule(debts, monthly_budget, strategy)?;
    let summary = summarize(debts, &schedule, strategy, monthly_budget, start_date);
    Ok(Report { summary, schedule })
}

/// Прогон всех стратегий в порядке `Strategy::ALL`.
pub fn compare_strategies(debts: &[Debt], monthly_budget: f64) -> Result<Vec<PlanSummary>> {
    Strategy::ALL
        .into_iter()
        .map(|st| {
            let schedule = compute_schedule(debts, monthly_budget, st)?;
            Ok(summarize(debts, &schedule, st, monthly_budget, None))
        })
        .collect()
}
