use assert_cmd::Command;
use predicates::prelude::*;

fn cli(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multi-level-argparse"));
    cmd.env(
        "MULTI_LEVEL_ARGPARSE_CONFIG",
        config_dir.path().join("config.json"),
    );
    cmd
}

#[test]
fn unknown_command_exits_1_with_usage() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .arg("bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "multi-level-argparse: 'bogus' is not a multi-level-argparse command",
        ))
        .stderr(predicate::str::contains("command_a, command_b, command_c"))
        .stderr(predicate::str::contains(
            "usage: multi-level-argparse <command> [<args>]",
        ));
}

#[test]
fn missing_required_flag_exits_2_with_leaf_usage() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["command_c", "count"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "the following arguments are required: --to",
        ))
        .stderr(predicate::str::contains(
            "usage: multi-level-argparse command_c count [flags]",
        ));
}

#[test]
fn help_goes_to_stdout_with_exit_0() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "usage: multi-level-argparse <command> [<args>]",
        ))
        .stdout(predicate::str::contains("brewups"))
        .stderr(predicate::str::is_empty());

    cli(&dir)
        .args(["command_b", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "usage: multi-level-argparse command_b [flags] <subcommand>",
        ));
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a subcommand is required"))
        .stderr(predicate::str::contains(
            "The most commonly used multi-level-argparse commands are:",
        ));
}

#[test]
fn leaf_command_runs() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["command_a", "-f"])
        .assert()
        .success()
        .stdout("Running multi-level-argparse command_a, foo=true, bar=false\n");

    cli(&dir)
        .args(["command_c", "count", "--to", "3"])
        .assert()
        .success()
        .stdout("1 2 3\n");
}

#[test]
fn malformed_config_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "not json").unwrap();

    cli(&dir)
        .arg("command_a")
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring unreadable configuration"));
}
