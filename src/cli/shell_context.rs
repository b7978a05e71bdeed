use finly_config::{Config, ConfigManager};
use finly_domain::Session;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every command handler for the lifetime of the shell.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    /// Digit grouping separator for the configured locale.
    pub fn separator(&self) -> char {
        self.config.grouping_separator()
    }
}
