use assert_cmd::Command;
use tempfile::TempDir;

/// Script-mode shell bound to an isolated `FINLY_HOME` with colors disabled.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finly_cli").unwrap();
    cmd.env("FINLY_CLI_SCRIPT", "1")
        .env("FINLY_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("COLORFGBG");
    cmd
}

pub fn run_script(home: &TempDir, lines: &[&str]) -> assert_cmd::assert::Assert {
    let mut input = lines.join("\n");
    input.push('\n');
    script_command(home).write_stdin(input).assert()
}
