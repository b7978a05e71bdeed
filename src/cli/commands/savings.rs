use finly_core::{Dashboard, SavingsService};
use finly_domain::SavingsGoalDraft;

use super::arg;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::format::{format_amount, parse_money, parse_position};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::render;

const USAGE: &str = "savings add <name> <goal> [saved]
savings deposit <index> <amount>
savings list";
const ADD_USAGE: &str = "savings add <name> <goal> [saved]";
const DEPOSIT_USAGE: &str = "savings deposit <index> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "savings",
        "Track savings goals and contributions",
        USAGE,
        cmd_savings,
    )]
}

fn cmd_savings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return list(context);
    };
    match action.to_lowercase().as_str() {
        "add" => add(context, &args[1..]),
        "deposit" => deposit(context, &args[1..]),
        "list" => list(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown savings action `{other}`"
        ))),
    }
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = SavingsGoalDraft {
        name: arg(args, 0, ADD_USAGE)?.to_string(),
        goal: parse_money(arg(args, 1, ADD_USAGE)?)?,
        saved: args.get(2).map(|raw| parse_money(raw)).transpose()?.unwrap_or(0),
    };
    SavingsService::register(&mut context.session, draft)?;

    if let Some(goal) = context.session.savings.last() {
        io::print_success(format!(
            "Goal `{}` registered for {}.",
            goal.name,
            format_amount(goal.goal(), context.separator())
        ));
    }
    list(context)
}

fn deposit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(
        arg(args, 0, DEPOSIT_USAGE)?,
        context.session.savings.len(),
        "goal",
    )?;
    let amount = parse_money(arg(args, 1, DEPOSIT_USAGE)?)?;
    let id = context.session.savings[index].id;

    if SavingsService::apply_contribution(&mut context.session, id, amount)? {
        let goal = &context.session.savings[index];
        if goal.is_reached() {
            io::print_success(format!("Goal `{}` reached.", goal.name));
        } else {
            io::print_success(format!(
                "Saved {} toward `{}`.",
                format_amount(goal.saved(), context.separator()),
                goal.name
            ));
        }
    } else {
        io::print_warning("Contribution must be a positive amount.");
    }
    list(context)
}

fn list(context: &mut ShellContext) -> CommandResult {
    let view = Dashboard::build(&context.session);
    render::savings(&view.goals, &view.savings, context.separator());
    Ok(())
}
