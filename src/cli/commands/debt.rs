use finly_core::{Dashboard, DebtService};
use finly_domain::{DebtDraft, Frequency};

use super::arg;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::format::{format_amount, parse_count, parse_date, parse_money, parse_position};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::render;

const USAGE: &str = "debt add <name> <installment> <installments> <YYYY-MM-DD> <frequency>
debt pay <index> [count]
debt list
debt summary";
const ADD_USAGE: &str = "debt add <name> <installment> <installments> <YYYY-MM-DD> <frequency>";
const PAY_USAGE: &str = "debt pay <index> [count]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "debt",
        "Register installment debts and their payments",
        USAGE,
        cmd_debt,
    )]
}

fn cmd_debt(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return list(context);
    };
    match action.to_lowercase().as_str() {
        "add" => add(context, &args[1..]),
        "pay" => pay(context, &args[1..]),
        "list" => list(context),
        "summary" => {
            let portfolio = DebtService::summarize_portfolio(&context.session.debts);
            render::debt_portfolio(&portfolio, context.separator());
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown debt action `{other}`"
        ))),
    }
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 5 {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    }
    let draft = DebtDraft {
        name: args[0].to_string(),
        installment_amount: parse_money(args[1])?,
        total_installments: parse_count(args[2], "installments")?,
        start_date: parse_date(args[3])?,
        frequency: Frequency::from_tag(args[4]),
    };
    DebtService::register(&mut context.session, draft)?;

    let sep = context.separator();
    if let Some(debt) = context.session.debts.last() {
        io::print_success(format!(
            "Debt `{}` registered: {} installments of {} ({}).",
            debt.name,
            debt.total_installments(),
            format_amount(debt.installment_amount(), sep),
            debt.frequency
        ));
    }
    list(context)
}

fn pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(arg(args, 0, PAY_USAGE)?, context.session.debts.len(), "debt")?;
    let count = match args.get(1) {
        Some(raw) => parse_count(raw, "count")?,
        None => 1,
    };
    let id = context.session.debts[index].id;
    let paid = DebtService::apply_payment(&mut context.session, id, count)?;

    let debt = &context.session.debts[index];
    if debt.is_settled() {
        io::print_success(format!("Debt `{}` is settled.", debt.name));
    } else {
        io::print_success(format!(
            "Debt `{}`: {paid} of {} installments paid.",
            debt.name,
            debt.total_installments()
        ));
    }
    list(context)
}

fn list(context: &mut ShellContext) -> CommandResult {
    let view = Dashboard::build(&context.session);
    render::debts(&view.debts, context.separator());
    Ok(())
}
