use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finly::core::{Dashboard, DebtService, FinanceService, SavingsService};
use finly::domain::{
    DebtDraft, ExpenseCategory, ExtraExpenseDraft, FinanceSnapshot, Frequency, SavingsGoalDraft,
    Session,
};

fn build_sample_session(count: usize) -> Session {
    let mut session = Session::new();
    let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    for idx in 0..count {
        let draft = DebtDraft {
            name: format!("Debt {idx}"),
            installment_amount: 50_000 + (idx as i64 % 100) * 1_000,
            total_installments: 12 + (idx as i64 % 24),
            start_date: start,
            frequency: Frequency::ALL[idx % Frequency::ALL.len()],
        };
        let id = DebtService::register(&mut session, draft).unwrap();
        DebtService::apply_payment(&mut session, id, (idx % 30) as i64).unwrap();

        SavingsService::register(
            &mut session,
            SavingsGoalDraft {
                name: format!("Goal {idx}"),
                goal: 1_000_000,
                saved: (idx as i64 * 7_919) % 1_200_000,
            },
        )
        .unwrap();

        FinanceService::add_extra_expense(
            &mut session,
            ExtraExpenseDraft {
                category: ExpenseCategory::ALL[idx % ExpenseCategory::ALL.len()],
                note: format!("Expense {idx}"),
                date: start + chrono::Duration::days((idx % 365) as i64),
                amount: 10_000,
            },
        )
        .unwrap();
    }
    session.set_finance(FinanceSnapshot::new(4_000_000, 500_000, 1_500_000));
    session
}

fn bench_portfolios(c: &mut Criterion) {
    let session = build_sample_session(black_box(5_000));

    c.bench_function("debt_portfolio_5k", |b| {
        b.iter(|| black_box(DebtService::summarize_portfolio(&session.debts)))
    });

    c.bench_function("savings_portfolio_5k", |b| {
        b.iter(|| black_box(SavingsService::summarize_portfolio(&session.savings)))
    });
}

fn bench_dashboard(c: &mut Criterion) {
    let session = build_sample_session(black_box(5_000));

    c.bench_function("dashboard_build_5k", |b| {
        b.iter(|| {
            let view = Dashboard::build(&session);
            black_box(view.finance.available);
        })
    });
}

criterion_group!(benches, bench_portfolios, bench_dashboard);
criterion_main!(benches);
