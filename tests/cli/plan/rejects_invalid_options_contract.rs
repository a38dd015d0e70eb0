use crate::harness::{TestContext, completion_server};
use predicates::prelude::*;

#[test]
fn plan_rejects_unknown_level() {
    let ctx = TestContext::new();
    let mut server = completion_server::start();
    let mock = completion_server::expect_no_calls(&mut server);

    ctx.cli_with_endpoint(&completion_server::base_url(&server))
        .args(["plan", "--topic", "Fractions", "--students", "25", "--duration", "45"])
        .args(["--level", "college"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid class level 'college'"))
        .stderr(predicate::str::contains("Elementary, Middle School, High School"));

    mock.assert();
}

#[test]
fn plan_rejects_unsupported_reference_type() {
    let ctx = TestContext::new();
    let slides = ctx.write_file("slides.pptx", "x");

    ctx.cli()
        .args(["plan", "--topic", "Fractions", "--students", "25", "--duration", "45"])
        .arg("--reference")
        .arg(&slides)
        .arg("--prompt-preview")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only .txt and .pdf are accepted"));
}

#[test]
fn plan_rejects_missing_reference_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "--topic", "Fractions", "--students", "25", "--duration", "45"])
        .args(["--reference", "missing.pdf", "--prompt-preview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reference file not found: missing.pdf"));
}
