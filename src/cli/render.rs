//! Paints core view models as shell text.

use finly_core::{Dashboard, DebtLine, DebtPortfolio, FinanceSummary, GoalLine, SavingsOverview};
use finly_domain::{Displayable, DueStatus, ExtraExpense, Responsibility};

use crate::cli::format::{format_amount, format_signed, progress_bar};
use crate::cli::io;
use crate::cli::output::section;

pub fn debts(lines: &[DebtLine<'_>], sep: char) {
    section("Debts");
    if lines.is_empty() {
        io::print_detail("No debts registered.");
        return;
    }
    for (index, line) in lines.iter().enumerate() {
        let summary = &line.summary;
        io::print_info(format!("{:>3}. {}", index + 1, line.debt.display_label()));
        io::print_detail(format!(
            "     {} {:>3}%  paid {} of {}, remaining {}",
            progress_bar(summary.progress_percent),
            summary.progress_percent,
            format_amount(summary.paid_amount, sep),
            format_amount(summary.total_amount, sep),
            format_amount(summary.remaining_amount, sep),
        ));
        match summary.next_due {
            DueStatus::Due(date) => {
                io::print_detail(format!("     next installment {}", date.format("%Y-%m-%d")))
            }
            DueStatus::Settled => io::print_success("     settled"),
        }
    }
}

pub fn debt_portfolio(portfolio: &DebtPortfolio, sep: char) {
    section("Debt summary");
    io::print_info(format!("  Total debt : {}", format_amount(portfolio.total_debt, sep)));
    io::print_info(format!("  Paid       : {}", format_amount(portfolio.total_paid, sep)));
    io::print_info(format!("  Pending    : {}", format_amount(portfolio.total_pending, sep)));
    io::print_info(format!(
        "  Progress   : {} {}%",
        progress_bar(portfolio.overall_progress_percent),
        portfolio.overall_progress_percent
    ));
}

pub fn savings(goals: &[GoalLine<'_>], overview: &SavingsOverview, sep: char) {
    section("Savings goals");
    let totals = match overview {
        SavingsOverview::NoGoals => {
            io::print_detail("No savings goals yet.");
            return;
        }
        SavingsOverview::Tracking(totals) => totals,
    };
    for (index, line) in goals.iter().enumerate() {
        let goal = line.goal;
        io::print_info(format!(
            "{:>3}. {}  {} / {}",
            index + 1,
            goal.name,
            format_amount(goal.saved(), sep),
            format_amount(goal.goal(), sep)
        ));
        let status = if goal.is_reached() {
            "reached".to_string()
        } else {
            format!("{} to go", format_amount(line.summary.remaining, sep))
        };
        io::print_detail(format!(
            "     {} {:>3}%  {}",
            progress_bar(line.summary.progress_percent),
            line.summary.progress_percent,
            status
        ));
    }
    io::print_info(format!(
        "  {} goal(s): saved {} of {}, pending {} ({}%)",
        totals.count,
        format_amount(totals.total_saved, sep),
        format_amount(totals.total_goal, sep),
        format_amount(totals.total_pending, sep),
        totals.overall_progress_percent
    ));
}

pub fn finance(summary: &FinanceSummary, sep: char) {
    section("Monthly finances");
    io::print_info(format!("  Income        : {}", format_amount(summary.total_income, sep)));
    io::print_info(format!("  Base expenses : {}", format_amount(summary.base_expenses, sep)));
    io::print_info(format!(
        "  Responsibilities: {}",
        format_amount(summary.total_responsibilities, sep)
    ));
    io::print_info(format!(
        "  Extra expenses: {}",
        format_amount(summary.total_extra_expenses, sep)
    ));
    io::print_info(format!("  Outflow       : {}", format_amount(summary.total_outflow, sep)));
    let available = format!("  Available     : {}", format_signed(summary.available, sep));
    if summary.is_overspent() {
        io::print_warning(available);
    } else {
        io::print_success(available);
    }
    if summary.has_salary() {
        io::print_detail(format!(
            "  {} {}% of salary committed",
            progress_bar(summary.salary_bar_percent),
            summary.salary_spent_percent
        ));
    } else {
        io::print_hint("Declare a salary with `finance set` to see how much of it is committed.");
    }
}

pub fn responsibilities(items: &[Responsibility], sep: char) {
    section("Responsibilities");
    if items.is_empty() {
        io::print_detail("No responsibilities registered.");
        return;
    }
    for (index, item) in items.iter().enumerate() {
        io::print_info(format!(
            "{:>3}. {:<24} {}",
            index + 1,
            item.name,
            format_amount(item.amount, sep)
        ));
    }
}

/// Expects expenses already ordered newest first.
pub fn extra_expenses(expenses: &[&ExtraExpense], sep: char) {
    section("Extra expenses");
    if expenses.is_empty() {
        io::print_detail("No extra expenses registered.");
        return;
    }
    for expense in expenses {
        io::print_info(format!(
            "  {}  {}",
            expense.display_label(),
            format_amount(expense.amount, sep)
        ));
    }
}

pub fn dashboard(view: &Dashboard<'_>, sep: char) {
    debts(&view.debts, sep);
    debt_portfolio(&view.debt_portfolio, sep);
    savings(&view.goals, &view.savings, sep);
    finance(&view.finance, sep);
    responsibilities(view.responsibilities, sep);
    extra_expenses(&view.extra_expenses, sep);
}
