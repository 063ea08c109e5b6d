use assert_cmd::Command;

/// Helper to get a Command for the promptguard binary.
#[allow(deprecated)]
fn promptguard_cmd() -> Command {
    Command::cargo_bin("promptguard").unwrap()
}

#[test]
fn help_works() {
    promptguard_cmd().arg("--help").assert().success();
}

#[test]
fn version_works() {
    promptguard_cmd().arg("--version").assert().success();
}
