use finly_config::Theme;
use tracing::info;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::utils::paths::terminal_prefers_dark;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "theme",
            "Show or change the color theme",
            "theme [light|dark|toggle]",
            cmd_theme,
        ),
        CommandEntry::new(
            "config",
            "Show the current display preferences",
            "config [show]",
            cmd_config,
        ),
    ]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let current = context.config.effective_theme(terminal_prefers_dark());
    let Some(choice) = args.first() else {
        io::print_info(format!("Theme: {current}"));
        return Ok(());
    };
    let next = if choice.eq_ignore_ascii_case("toggle") {
        current.toggled()
    } else {
        choice.parse::<Theme>().map_err(|message| {
            CommandError::InvalidArguments(format!("{message}; use light, dark or toggle"))
        })?
    };
    context.config.theme = Some(next);
    context.persist_config()?;
    info!(theme = %next, "theme changed");
    io::print_success(format!("Theme set to {next}."));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        None | Some("show") => {
            show_config(context);
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output_section("Configuration");
    io::print_info(format!("  Locale   : {}", config.locale));
    io::print_info(format!("  Currency : {}", config.currency));
    let theme = match config.theme {
        Some(theme) => theme.to_string(),
        None => format!(
            "{} (from terminal)",
            config.effective_theme(terminal_prefers_dark())
        ),
    };
    io::print_info(format!("  Theme    : {theme}"));
    io::print_info(format!("  Colors   : {}", config.ui_color_enabled));
    io::print_detail(format!(
        "  Stored at {}",
        context.config_manager.config_path().display()
    ));
}
