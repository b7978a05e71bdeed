mod common;

use common::run_script;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn debt_progress_and_settlement() {
    let home = TempDir::new().unwrap();
    run_script(
        &home,
        &[
            "debt add \"Car loan\" 100.000 12 2024-01-15 monthly",
            "debt pay 1 3",
            "debt summary",
            "debt pay 1 50",
            "exit",
        ],
    )
    .success()
    .stdout(contains("Debt `Car loan` registered: 12 installments of $100.000 (monthly)."))
    .stdout(contains("next installment 2024-04-15"))
    .stdout(contains("Total debt : $1.200.000"))
    .stdout(contains("Paid       : $300.000"))
    .stdout(contains("Debt `Car loan` is settled."));
}

#[test]
fn rejected_creation_is_reported_not_fatal() {
    let home = TempDir::new().unwrap();
    run_script(
        &home,
        &[
            "debt add Loan 0 12 2024-01-15 monthly",
            "debt list",
            "savings add Trip 100",
        ],
    )
    .success()
    .stdout(contains("[!]"))
    .stdout(contains("No debts registered."))
    .stdout(contains("Goal `Trip` registered for $100."));
}

#[test]
fn savings_empty_state_and_capped_deposit() {
    let home = TempDir::new().unwrap();
    run_script(
        &home,
        &["savings list", "savings add Trip 500000 100000", "savings deposit 1 900000"],
    )
    .success()
    .stdout(contains("No savings goals yet."))
    .stdout(contains("Goal `Trip` reached."))
    .stdout(contains("100%"));
}

#[test]
fn finance_reports_overcommitment() {
    let home = TempDir::new().unwrap();
    run_script(
        &home,
        &[
            "finance set 1000000 0 800000",
            "responsibility add Rent 700000",
            "expense add food Groceries 2024-03-02 50000",
            "expense add transport Bus 2024-03-05 10000",
            "finance",
        ],
    )
    .success()
    .stdout(contains("Available     : -$560.000"))
    .stdout(contains("156% of salary committed"))
    .stdout(
        contains("2024-03-05 [transport] Bus")
            .and(contains("2024-03-02 [food] Groceries")),
    );
}

#[test]
fn finance_without_salary_hints_instead_of_percent() {
    let home = TempDir::new().unwrap();
    run_script(&home, &["finance"])
        .success()
        .stdout(contains("Declare a salary"))
        .stdout(contains("of salary committed").not());
}

#[test]
fn theme_choice_survives_restart() {
    let home = TempDir::new().unwrap();
    run_script(&home, &["theme dark"])
        .success()
        .stdout(contains("Theme set to dark."));
    run_script(&home, &["theme"])
        .success()
        .stdout(contains("Theme: dark"));
    assert!(home.path().join("config.json").is_file());
}

#[test]
fn unknown_command_gets_suggestion() {
    let home = TempDir::new().unwrap();
    run_script(&home, &["dashbord"])
        .success()
        .stdout(contains("Unknown command `dashbord`"))
        .stdout(contains("Suggestion: `dashboard`?"));
}

#[test]
fn help_lists_registered_commands() {
    let home = TempDir::new().unwrap();
    run_script(&home, &["help", "help debt"])
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("debt pay <index> [count]"));
}

#[test]
fn unknown_theme_is_rejected_without_saving() {
    let home = TempDir::new().unwrap();
    run_script(&home, &["theme neon", "config show"])
        .success()
        .stdout(contains("unknown theme `neon`"))
        .stdout(contains("(from terminal)"));
    assert!(!home.path().join("config.json").exists());
}
