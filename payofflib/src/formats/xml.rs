//! Упрощённый XML.
//! Вход: <Debts><debt><id/><name/><balance/><interest_rate/><minimum_payment/></debt>...</Debts>
//! Выход: <Report> со сводкой, <debts> и <months>.

use crate::{
    error::{PayoffError, Result},
    model::{Debt, MonthSnapshot},
    money::{from_decimal, to_cents},
    summary::{DebtPayoff, Report},
};
use quick_xml::{de::from_reader, se::to_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Deserialize, Debug)]
struct XmlDebt {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    interest_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    minimum_payment: Decimal,
}

#[derive(Deserialize, Debug)]
struct XmlDebts {
    #[serde(rename = "debt", default)]
    debts: Vec<XmlDebt>,
}

#[derive(Serialize, Debug)]
struct XmlPayoff {
    #[serde(rename = "@id")]
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payoff_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payoff_date: Option<String>,
}

#[derive(Serialize, Debug)]
struct XmlPayoffs {
    #[serde(rename = "debt")]
    items: Vec<XmlPayoff>,
}

#[derive(Serialize, Debug)]
struct XmlPayment {
    #[serde(rename = "@debt_id")]
    debt_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    remaining_balance: Decimal,
    is_paid_off: bool,
}

#[derive(Serialize, Debug)]
struct XmlMonth {
    #[serde(rename = "@number")]
    number: u32,
    #[serde(with = "rust_decimal::serde::str")]
    total_remaining: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_paid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_interest_paid: Decimal,
    #[serde(rename = "payment")]
    payments: Vec<XmlPayment>,
}

#[derive(Serialize, Debug)]
struct XmlMonths {
    #[serde(rename = "month")]
    items: Vec<XmlMonth>,
}

#[derive(Serialize, Debug)]
#[serde(rename = "Report")]
struct XmlReport {
    strategy: String,
    #[serde(with = "rust_decimal::serde::str")]
    monthly_budget: Decimal,
    total_months: u32,
    #[serde(with = "rust_decimal::serde::str")]
    total_paid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_interest_paid: Decimal,
    converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    debts: XmlPayoffs,
    months: XmlMonths,
}

fn xml_payoff(p: &DebtPayoff) -> XmlPayoff {
    XmlPayoff {
        id: p.debt_id.clone(),
        name: p.name.clone(),
        payoff_month: p.payoff_month,
        payoff_date: p.payoff_date.map(|d| d.format("%Y-%m-%d").to_string()),
    }
}

fn xml_month(m: &MonthSnapshot) -> Result<XmlMonth> {
    let payments = m
        .payments
        .iter()
        .map(|p| {
            Ok(XmlPayment {
                debt_id: p.debt_id.clone(),
                amount: to_cents(p.amount)?,
                remaining_balance: to_cents(p.remaining_balance)?,
                is_paid_off: p.is_paid_off,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(XmlMonth {
        number: m.month,
        total_remaining: to_cents(m.total_remaining)?,
        total_paid: to_cents(m.total_paid)?,
        total_interest_paid: to_cents(m.total_interest_paid)?,
        payments,
    })
}

pub struct SimpleXml;

impl crate::traits::ReadFormat for SimpleXml {
    fn read<R: BufRead>(r: R) -> Result<Vec<Debt>> {
        let x: XmlDebts = from_reader(r).map_err(|e| PayoffError::Xml(format!("{e}")))?;

        x.debts
            .into_iter()
            .map(|d| {
                Ok(Debt {
                    balance: from_decimal("balance", d.balance)?,
                    interest_rate: from_decimal("interest_rate", d.interest_rate)?,
                    minimum_payment: from_decimal("minimum_payment", d.minimum_payment)?,
                    name: d.name.unwrap_or_else(|| d.id.clone()),
                    id: d.id,
                })
            })
            .collect()
    }
}

impl crate::traits::WriteFormat for SimpleXml {
    fn write<W: Write>(mut w: W, report: &Report) -> Result<()> {
        let s = &report.summary;
        let x = XmlReport {
            strategy: s.strategy.to_string(),
            monthly_budget: to_cents(s.monthly_budget)?,
            total_months: s.total_months,
            total_paid: to_cents(s.total_paid)?,
            total_interest_paid: to_cents(s.total_interest_paid)?,
            converged: s.converged,
            start_date: s.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            debts: XmlPayoffs {
                items: s.debts.iter().map(xml_payoff).collect(),
            },
            months: XmlMonths {
                items: report
                    .schedule
                    .months
                    .iter()
                    .map(xml_month)
                    .collect::<Result<Vec<_>>>()?,
            },
        };

        let out = to_string(&x).map_err(|e| PayoffError::Xml(format!("{e}")))?;
        w.write_all(out.as_bytes())?;
        Ok(())
    }
}
