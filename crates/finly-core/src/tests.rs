use chrono::NaiveDate;

use finly_domain::{
    DebtDraft, DueStatus, ExpenseCategory, ExtraExpenseDraft, FinanceSnapshot, Frequency,
    ResponsibilityDraft, SavingsGoalDraft, Session,
};

use crate::{
    dashboard::Dashboard, debt_service::DebtService, finance_service::FinanceService,
    savings_service::SavingsService, CoreError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monthly_loan(name: &str, installment: i64, total: i64) -> DebtDraft {
    DebtDraft {
        name: name.into(),
        installment_amount: installment,
        total_installments: total,
        start_date: date(2024, 1, 15),
        frequency: Frequency::Monthly,
    }
}

#[test]
fn paying_every_installment_settles_the_debt() {
    let mut session = Session::new();
    let id = DebtService::register(&mut session, monthly_loan("Car", 100_000, 12)).unwrap();

    let paid = DebtService::apply_payment(&mut session, id, 12).unwrap();
    assert_eq!(paid, 12);

    let summary = DebtService::summarize(session.debt(id).unwrap());
    assert_eq!(summary.next_due, DueStatus::Settled);
    assert_eq!(summary.progress_percent, 100);
    assert_eq!(summary.remaining_amount, 0);
}

#[test]
fn paid_installments_stay_in_bounds_for_any_count() {
    let mut session = Session::new();
    let id = DebtService::register(&mut session, monthly_loan("Laptop", 50_000, 6)).unwrap();

    for count in [-1_000, -1, 0, 2, 3, i64::MAX, i64::MIN, 7] {
        let paid = DebtService::apply_payment(&mut session, id, count).unwrap();
        let debt = session.debt(id).unwrap();
        assert!(paid <= debt.total_installments());
        assert_eq!(paid, debt.paid_installments());
    }
    assert_eq!(session.debt(id).unwrap().paid_installments(), 6);
}

#[test]
fn saved_amount_stays_in_bounds_for_any_contribution() {
    let mut session = Session::new();
    let id = SavingsService::register(
        &mut session,
        SavingsGoalDraft {
            name: "Vacation".into(),
            goal: 500_000,
            saved: 0,
        },
    )
    .unwrap();

    assert!(SavingsService::apply_contribution(&mut session, id, 600_000).unwrap());
    assert_eq!(session.savings_goal(id).unwrap().saved(), 500_000);

    for amount in [i64::MIN, -1, 0, 1, i64::MAX] {
        SavingsService::apply_contribution(&mut session, id, amount).unwrap();
        let goal = session.savings_goal(id).unwrap();
        assert!(goal.saved() <= goal.goal());
    }
}

#[test]
fn portfolio_total_matches_sum_of_debt_totals() {
    let mut session = Session::new();
    DebtService::register(&mut session, monthly_loan("A", 100_000, 12)).unwrap();
    DebtService::register(&mut session, monthly_loan("B", 35_000, 3)).unwrap();
    let b = session.debts[1].id;
    DebtService::apply_payment(&mut session, b, 1).unwrap();

    let portfolio = DebtService::summarize_portfolio(&session.debts);
    let expected: u64 = session
        .debts
        .iter()
        .map(|debt| DebtService::summarize(debt).total_amount)
        .sum();
    assert_eq!(portfolio.total_debt, expected);
    assert_eq!(portfolio.total_paid, 35_000);
    assert_eq!(portfolio.total_pending, expected - 35_000);
}

#[test]
fn rejected_creations_leave_state_untouched() {
    let mut session = Session::new();
    let before = session.updated_at;

    assert!(matches!(
        DebtService::register(&mut session, monthly_loan("Bad", 0, 12)),
        Err(CoreError::Validation(_))
    ));
    assert!(SavingsService::register(
        &mut session,
        SavingsGoalDraft {
            name: "Zero".into(),
            goal: 0,
            saved: 0,
        },
    )
    .is_err());
    assert!(FinanceService::add_responsibility(
        &mut session,
        ResponsibilityDraft {
            name: " ".into(),
            amount: 10,
        },
    )
    .is_err());
    assert!(FinanceService::add_extra_expense(
        &mut session,
        ExtraExpenseDraft {
            category: ExpenseCategory::Food,
            note: "Lunch".into(),
            date: date(2024, 2, 1),
            amount: -5,
        },
    )
    .is_err());

    assert!(session.is_empty());
    assert_eq!(session.updated_at, before);
}

#[test]
fn dashboard_reflects_every_section() {
    let mut session = Session::new();
    let debt = DebtService::register(&mut session, monthly_loan("Phone", 10_000, 4)).unwrap();
    DebtService::apply_payment(&mut session, debt, 1).unwrap();
    FinanceService::declare(&mut session, FinanceSnapshot::new(2_000_000, 0, 2_500_000));
    FinanceService::add_extra_expense(
        &mut session,
        ExtraExpenseDraft {
            category: ExpenseCategory::Transport,
            note: "Bus card".into(),
            date: date(2024, 3, 1),
            amount: 20_000,
        },
    )
    .unwrap();
    FinanceService::add_extra_expense(
        &mut session,
        ExtraExpenseDraft {
            category: ExpenseCategory::Food,
            note: "Market".into(),
            date: date(2024, 3, 20),
            amount: 80_000,
        },
    )
    .unwrap();

    let dashboard = Dashboard::build(&session);
    assert_eq!(dashboard.debts.len(), 1);
    assert_eq!(dashboard.debts[0].summary.progress_percent, 25);
    assert_eq!(
        dashboard.debts[0].summary.next_due,
        DueStatus::Due(date(2024, 2, 15))
    );
    assert_eq!(dashboard.debt_portfolio.total_debt, 40_000);
    assert!(dashboard.savings.is_empty());
    assert!(dashboard.goals.is_empty());
    assert_eq!(dashboard.finance.total_extra_expenses, 100_000);
    assert_eq!(dashboard.finance.available, -600_000);
    assert_eq!(dashboard.finance.salary_spent_percent, 130);
    assert_eq!(dashboard.extra_expenses[0].note, "Market");
}
