use std::{io, path::PathBuf};

use finly_config::{ConfigError, ConfigManager};
use finly_core::CoreError;
use finly_domain::Session;
use strsim::levenshtein;
use thiserror::Error;
use tracing::{debug, warn};

use super::commands;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;
pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::cli::io as cli_io;
use crate::errors::{CliError, FinlyError};
use crate::utils::paths::{app_data_dir, terminal_prefers_dark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] FinlyError),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(FinlyError::from(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(FinlyError::from(err))
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Core(FinlyError::from(err))
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self::with_base_dir(mode, app_data_dir())
    }

    /// Builds a shell whose configuration lives under `base`.
    pub fn with_base_dir(mode: CliMode, base: PathBuf) -> Self {
        let config_manager = ConfigManager::with_base_dir(base);
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                warn!("config unreadable, using defaults: {err}");
                Default::default()
            }
        };

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let context = Self {
            mode,
            registry,
            session: Session::new(),
            config_manager,
            config,
            running: true,
        };
        context.apply_config();
        debug!(path = %context.config_manager.config_path().display(), "shell ready");
        context
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        "finly> ".into()
    }

    /// Pushes the loaded configuration into the output layer.
    pub(crate) fn apply_config(&self) {
        let color_enabled =
            self.config.ui_color_enabled && std::env::var_os("NO_COLOR").is_none();
        output::set_preferences(OutputPreferences {
            color_enabled,
            theme: self.config.effective_theme(terminal_prefers_dark()),
        });
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        self.apply_config();
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit shell?")?)
    }

    /// Reports a failed command; rejected mutations surface as warnings.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(FinlyError::Core(core)) => {
                self.print_warning(&core.to_string());
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

#[cfg(test)]
pub(crate) fn process_script(base: PathBuf, lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_base_dir(CliMode::Script, base);
    for line in lines {
        let outcome = app.process_line(line);
        match outcome {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
