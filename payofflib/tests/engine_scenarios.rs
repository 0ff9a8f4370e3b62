use payofflib::{
    check_budget, compute_schedule, Debt, Outcome, PayoffError, Strategy, MAX_MONTHS,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn two_debts() -> Vec<Debt> {
    vec![
        Debt::new("a", "Card A", 1000.0, 20.0, 50.0),
        Debt::new("b", "Card B", 1000.0, 5.0, 50.0),
    ]
}

#[test]
fn minimum_equal_to_balance_leaves_interest_for_second_month() {
    // Намеренно не "погашение за 1 месяц / 1212.00": платёж ограничен бюджетом 1200,
    // проценты 12.00 остаются и гасятся во втором месяце (итого 1212.12).
    // Погашение за один месяц проверяет oversized_minimum_is_clamped_to_balance_plus_interest.
    let debts = vec![Debt::new("loan", "Loan", 1200.0, 12.0, 1200.0)];
    let s = compute_schedule(&debts, 1200.0, Strategy::Avalanche).expect("schedule");

    assert_eq!(s.outcome, Outcome::PaidOff);
    assert_eq!(s.len(), 2);

    let m1 = &s.months[0];
    assert!(close(m1.payments[0].amount, 1200.0));
    assert!(close(m1.payments[0].remaining_balance, 12.0));
    assert!(!m1.payments[0].is_paid_off);
    assert!(close(m1.total_interest_paid, 12.0));

    let m2 = &s.months[1];
    assert_eq!(m2.payments[0].remaining_balance, 0.0);
    assert!(m2.payments[0].is_paid_off);
    assert!(close(s.total_paid(), 1212.12));
    assert!(close(s.total_interest_paid(), 12.12));
    assert_eq!(s.payoff_month("loan"), Some(2));
}

#[test]
fn oversized_minimum_is_clamped_to_balance_plus_interest() {
    let debts = vec![Debt::new("loan", "Loan", 1200.0, 12.0, 1300.0)];
    let s = compute_schedule(&debts, 1300.0, Strategy::Avalanche).expect("schedule");

    assert_eq!(s.len(), 1);
    assert_eq!(s.outcome, Outcome::PaidOff);
    let p = &s.months[0].payments[0];
    assert!(close(p.amount, 1212.0));
    assert_eq!(p.remaining_balance, 0.0);
    assert!(p.is_paid_off);
    assert!(close(s.total_paid(), 1212.0));
    assert!(close(s.total_interest_paid(), 12.0));
    assert_eq!(s.months[0].total_remaining, 0.0);
}

#[test]
fn avalanche_sends_extra_to_highest_rate() {
    let s = compute_schedule(&two_debts(), 200.0, Strategy::Avalanche).expect("schedule");
    let m1 = &s.months[0];
    let a = m1.payment_for("a").unwrap();
    let b = m1.payment_for("b").unwrap();

    assert!(a.remaining_balance < b.remaining_balance);
    assert!(close(a.amount, 150.0));
    assert!(close(b.amount, 50.0));
    assert!(close(m1.total_paid, 200.0));
}

#[test]
fn snowball_follows_balance_after_minimums() {
    // Намеренно доплату получает b, а не a: snowball сравнивает остатки после
    // минимальных платежей, и у b (ставка 5%) остаток уже меньше, так что ничьей нет.
    // Правило ничьей по порядку ввода проверяет snowball_tie_goes_to_first_debt.
    let s = compute_schedule(&two_debts(), 200.0, Strategy::Snowball).expect("schedule");
    let m1 = &s.months[0];
    assert!(close(m1.payment_for("a").unwrap().amount, 50.0));
    assert!(close(m1.payment_for("b").unwrap().amount, 150.0));
}

#[test]
fn snowball_tie_goes_to_first_debt() {
    let debts = vec![
        Debt::new("a", "Card A", 1000.0, 10.0, 50.0),
        Debt::new("b", "Card B", 1000.0, 10.0, 50.0),
    ];
    let s = compute_schedule(&debts, 200.0, Strategy::Snowball).expect("schedule");
    let m1 = &s.months[0];
    assert!(close(m1.payment_for("a").unwrap().amount, 150.0));
    assert!(close(m1.payment_for("b").unwrap().amount, 50.0));
}

#[test]
fn avalanche_tie_keeps_input_order_every_month() {
    let debts = vec![
        Debt::new("x", "X", 500.0, 10.0, 20.0),
        Debt::new("y", "Y", 500.0, 10.0, 20.0),
    ];
    let s = compute_schedule(&debts, 140.0, Strategy::Avalanche).expect("schedule");
    let x_done = s.payoff_month("x").expect("x paid off");
    let y_done = s.payoff_month("y").expect("y paid off");
    assert!(x_done < y_done);

    for m in s.months.iter().filter(|m| m.month <= x_done) {
        assert_eq!(m.payment_for("y").unwrap().amount, 20.0, "month {}", m.month);
    }
}

#[test]
fn paid_off_debts_record_zero_payments() {
    let debts = vec![
        Debt::new("small", "Small", 100.0, 0.0, 10.0),
        Debt::new("big", "Big", 2000.0, 0.0, 10.0),
    ];
    let s = compute_schedule(&debts, 200.0, Strategy::Snowball).expect("schedule");
    assert_eq!(s.payoff_month("small"), Some(1));

    for m in &s.months[1..] {
        let small = m.payment_for("small").unwrap();
        assert_eq!(small.amount, 0.0);
        assert_eq!(small.remaining_balance, 0.0);
        assert!(small.is_paid_off);
    }
}

#[test]
fn zero_balance_debt_is_paid_off_in_first_month() {
    let debts = vec![Debt::new("z", "Zero", 0.0, 15.0, 25.0)];
    let s = compute_schedule(&debts, 25.0, Strategy::Avalanche).expect("schedule");
    assert_eq!(s.len(), 1);
    assert_eq!(s.months[0].payments[0].amount, 0.0);
    assert!(s.converged());
}

#[test]
fn negative_amortization_stops_at_cap() {
    // Проценты 200 в месяц, платёж 10: остаток не уменьшается.
    let debts = vec![Debt::new("d", "Stuck", 10_000.0, 24.0, 10.0)];
    let s = compute_schedule(&debts, 10.0, Strategy::Avalanche).expect("schedule");

    assert_eq!(s.outcome, Outcome::CapReached);
    assert_eq!(s.len(), MAX_MONTHS as usize);
    assert!(!s.converged());
    assert_eq!(s.payoff_month("d"), None);

    match s.require_payoff() {
        Err(PayoffError::NonConvergent { months }) => assert_eq!(months, MAX_MONTHS),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn repeated_runs_are_identical() {
    let debts = two_debts();
    let first = compute_schedule(&debts, 180.0, Strategy::HighestPaymentFirst).unwrap();
    let second = compute_schedule(&debts, 180.0, Strategy::HighestPaymentFirst).unwrap();
    assert_eq!(first, second);
    assert_eq!(debts, two_debts());
}

#[test]
fn invalid_input_is_rejected() {
    let empty: Vec<Debt> = Vec::new();
    assert!(matches!(
        compute_schedule(&empty, 100.0, Strategy::Avalanche),
        Err(PayoffError::InvalidInput(_))
    ));

    let negative = vec![Debt::new("a", "A", -1.0, 5.0, 10.0)];
    assert!(matches!(
        compute_schedule(&negative, 100.0, Strategy::Avalanche),
        Err(PayoffError::InvalidInput(_))
    ));

    let nan_rate = vec![Debt::new("a", "A", 100.0, f64::NAN, 10.0)];
    assert!(matches!(
        compute_schedule(&nan_rate, 100.0, Strategy::Avalanche),
        Err(PayoffError::InvalidInput(_))
    ));

    let dup = vec![Debt::new("a", "A", 100.0, 5.0, 10.0), Debt::new("a", "B", 50.0, 5.0, 10.0)];
    assert!(matches!(
        compute_schedule(&dup, 100.0, Strategy::Avalanche),
        Err(PayoffError::InvalidInput(_))
    ));

    assert!(matches!(
        compute_schedule(&two_debts(), -5.0, Strategy::Avalanche),
        Err(PayoffError::InvalidInput(_))
    ));
}

#[test]
fn budget_check_is_separate_from_engine() {
    let debts = two_debts();
    assert!(check_budget(&debts, 100.0).is_ok());
    match check_budget(&debts, 99.0) {
        Err(PayoffError::InfeasibleBudget { budget, required }) => {
            assert_eq!(budget, 99.0);
            assert_eq!(required, 100.0);
        }
        other => panic!("unexpected: {other:?}"),
    }
    // движок сам бюджет не проверяет
    assert!(compute_schedule(&debts, 99.0, Strategy::Avalanche).is_ok());
}
