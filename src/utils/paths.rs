use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".finly";

/// Returns the application data directory: `$FINLY_HOME`, else `~/.finly`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINLY_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Whether the terminal advertises a dark background through `COLORFGBG` (`fg;bg`).
pub fn terminal_prefers_dark() -> bool {
    env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next().map(str::to_string))
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| matches!(bg, 0..=6 | 8))
        .unwrap_or(false)
}
