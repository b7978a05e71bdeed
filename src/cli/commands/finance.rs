use finly_core::FinanceService;
use finly_domain::{ExpenseCategory, ExtraExpenseDraft, FinanceSnapshot, ResponsibilityDraft};

use super::arg;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::format::{format_amount, parse_date, parse_money};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::render;

const FINANCE_USAGE: &str = "finance set <salary> <extra-income> <expenses>
finance [show]";
const SET_USAGE: &str = "finance set <salary> <extra-income> <expenses>";
const RESPONSIBILITY_USAGE: &str = "responsibility add <name> <amount>
responsibility list";
const RESPONSIBILITY_ADD_USAGE: &str = "responsibility add <name> <amount>";
const EXPENSE_USAGE: &str = "expense add <category> <note> <YYYY-MM-DD> <amount>
expense list";
const EXPENSE_ADD_USAGE: &str = "expense add <category> <note> <YYYY-MM-DD> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "finance",
            "Declare and reconcile monthly income and expenses",
            FINANCE_USAGE,
            cmd_finance,
        ),
        CommandEntry::new(
            "responsibility",
            "Record fixed monthly obligations",
            RESPONSIBILITY_USAGE,
            cmd_responsibility,
        ),
        CommandEntry::new(
            "expense",
            "Record dated extra expenses",
            EXPENSE_USAGE,
            cmd_expense,
        ),
    ]
}

fn cmd_finance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        None | Some("show") => show(context),
        Some("set") => {
            let salary = parse_money(arg(args, 1, SET_USAGE)?)?;
            let extra_income = parse_money(arg(args, 2, SET_USAGE)?)?;
            let expenses = parse_money(arg(args, 3, SET_USAGE)?)?;
            FinanceService::declare(
                &mut context.session,
                FinanceSnapshot::new(
                    salary.unsigned_abs(),
                    extra_income.unsigned_abs(),
                    expenses.unsigned_abs(),
                ),
            );
            io::print_success("Monthly finances updated.");
            show(context)
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown finance action `{other}`"
        ))),
    }
}

fn show(context: &mut ShellContext) -> CommandResult {
    let sep = context.separator();
    let summary = FinanceService::summarize_session(&context.session);
    render::finance(&summary, sep);
    render::responsibilities(&context.session.responsibilities, sep);
    let expenses = FinanceService::expenses_newest_first(&context.session.extra_expenses);
    render::extra_expenses(&expenses, sep);
    Ok(())
}

fn cmd_responsibility(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sep = context.separator();
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        None | Some("list") => {
            render::responsibilities(&context.session.responsibilities, sep);
            Ok(())
        }
        Some("add") => {
            let draft = ResponsibilityDraft {
                name: arg(args, 1, RESPONSIBILITY_ADD_USAGE)?.to_string(),
                amount: parse_money(arg(args, 2, RESPONSIBILITY_ADD_USAGE)?)?,
            };
            FinanceService::add_responsibility(&mut context.session, draft)?;
            if let Some(item) = context.session.responsibilities.last() {
                io::print_success(format!(
                    "Responsibility `{}` added: {} per month.",
                    item.name,
                    format_amount(item.amount, sep)
                ));
            }
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown responsibility action `{other}`"
        ))),
    }
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sep = context.separator();
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        None | Some("list") => {
            let expenses = FinanceService::expenses_newest_first(&context.session.extra_expenses);
            render::extra_expenses(&expenses, sep);
            Ok(())
        }
        Some("add") => {
            let category = arg(args, 1, EXPENSE_ADD_USAGE)?
                .parse::<ExpenseCategory>()
                .map_err(|message| {
                    let known: Vec<&str> =
                        ExpenseCategory::ALL.iter().map(|category| category.label()).collect();
                    CommandError::InvalidArguments(format!(
                        "{message}; expected one of: {}",
                        known.join(", ")
                    ))
                })?;
            let draft = ExtraExpenseDraft {
                category,
                note: arg(args, 2, EXPENSE_ADD_USAGE)?.to_string(),
                date: parse_date(arg(args, 3, EXPENSE_ADD_USAGE)?)?,
                amount: parse_money(arg(args, 4, EXPENSE_ADD_USAGE)?)?,
            };
            FinanceService::add_extra_expense(&mut context.session, draft)?;
            if let Some(expense) = context.session.extra_expenses.last() {
                io::print_success(format!(
                    "Expense `{}` recorded: {}.",
                    expense.note,
                    format_amount(expense.amount, sep)
                ));
            }
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown expense action `{other}`"
        ))),
    }
}
