use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn options_lists_every_selection() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elementary (default)"))
        .stdout(predicate::str::contains("Middle School"))
        .stdout(predicate::str::contains("High School"))
        .stdout(predicate::str::contains("In-Person"))
        .stdout(predicate::str::contains("Evaluation"));
}

#[test]
fn options_alias_works_without_configuration() {
    let ctx = TestContext::new();

    ctx.cli().arg("o").assert().success().stdout(predicate::str::contains("Online (default)"));
}
