//! CSV.
//! Долги на входе: id,name,balance,interest_rate,minimum_payment
//! График на выходе: month,debt_id,amount,remaining_balance,is_paid_off,total_remaining,total_paid,total_interest_paid

use crate::{
    error::Result,
    model::Debt,
    money::{parse_amount, to_cents},
    summary::{PlanSummary, Report},
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvDebtRow {
    id: String,
    name: Option<String>,
    balance: String,
    interest_rate: String,
    minimum_payment: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    month: u32,
    debt_id: &'a str,
    amount: String,
    remaining_balance: String,
    is_paid_off: bool,
    total_remaining: String,
    total_paid: String,
    total_interest_paid: String,
}

#[derive(serde::Serialize)]
struct CsvSummaryRow {
    strategy: &'static str,
    monthly_budget: String,
    total_months: u32,
    total_paid: String,
    total_interest_paid: String,
    converged: bool,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Debt>> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(r);
        let mut debts = Vec::new();

        for rec in rdr.deserialize::<CsvDebtRow>() {
            let row = rec?;
            debts.push(Debt {
                balance: parse_amount("balance", &row.balance)?,
                interest_rate: parse_amount("interest_rate", &row.interest_rate)?,
                minimum_payment: parse_amount("minimum_payment", &row.minimum_payment)?,
                name: row.name.unwrap_or_else(|| row.id.clone()),
                id: row.id,
            });
        }
        Ok(debts)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, report: &Report) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for m in &report.schedule.months {
            let total_remaining = to_cents(m.total_remaining)?.to_string();
            let total_paid = to_cents(m.total_paid)?.to_string();
            let total_interest_paid = to_cents(m.total_interest_paid)?.to_string();

            for p in &m.payments {
                wrt.serialize(CsvOutRow {
                    month: m.month,
                    debt_id: &p.debt_id,
                    amount: to_cents(p.amount)?.to_string(),
                    remaining_balance: to_cents(p.remaining_balance)?.to_string(),
                    is_paid_off: p.is_paid_off,
                    total_remaining: total_remaining.clone(),
                    total_paid: total_paid.clone(),
                    total_interest_paid: total_interest_paid.clone(),
                })?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}

/// Таблица сравнения стратегий, по строке на стратегию.
pub fn write_comparison<W: Write>(mut w: W, summaries: &[PlanSummary]) -> Result<()> {
    let mut wrt = WriterBuilder::new().from_writer(&mut w);
    for s in summaries {
        wrt.serialize(CsvSummaryRow {
            strategy: s.strategy.as_str(),
            monthly_budget: to_cents(s.monthly_budget)?.to_string(),
            total_months: s.total_months,
            total_paid: to_cents(s.total_paid)?.to_string(),
            total_interest_paid: to_cents(s.total_interest_paid)?.to_string(),
            converged: s.converged,
        })?;
    }
    wrt.flush()?;
    Ok(())
}
