//! Стратегии выбора долга, на который уходит остаток бюджета.

use crate::{engine::WorkingDebt, error::PayoffError};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Сначала самая высокая ставка.
    Avalanche,
    /// Сначала самый маленький остаток.
    Snowball,
    HighestPaymentFirst,
    LowestPaymentFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Avalanche,
        Strategy::Snowball,
        Strategy::HighestPaymentFirst,
        Strategy::LowestPaymentFirst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
            Strategy::HighestPaymentFirst => "highestPaymentFirst",
            Strategy::LowestPaymentFirst => "lowestPaymentFirst",
        }
    }

    /// `Less` — значит `a` получает доплату раньше `b`.
    pub fn compare(self, a: &WorkingDebt, b: &WorkingDebt) -> Ordering {
        match self {
            Strategy::Avalanche => b.interest_rate.total_cmp(&a.interest_rate),
            Strategy::Snowball => a.remaining_balance.total_cmp(&b.remaining_balance),
            Strategy::HighestPaymentFirst => b.minimum_payment.total_cmp(&a.minimum_payment),
            Strategy::LowestPaymentFirst => a.minimum_payment.total_cmp(&b.minimum_payment),
        }
    }

    /// Индекс (в `debts`) непогашенного долга, который получит доплату.
    ///
    /// Полная стабильная сортировка: при равенстве побеждает долг,
    /// стоящий раньше во входном списке.
    pub fn select_target(self, debts: &[WorkingDebt]) -> Option<usize> {
        let mut active: Vec<usize> = debts
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.is_paid_off)
            .map(|(i, _)| i)
            .collect();
        active.sort_by(|&a, &b| self.compare(&debts[a], &debts[b]));
        active.first().copied()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| PayoffError::Parse(format!("unknown strategy: {s}")))
    }
}
