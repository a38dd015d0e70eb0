use crate::harness::{TestContext, completion_server};
use predicates::prelude::*;

#[test]
fn plan_rejects_empty_topic_without_calling_endpoint() {
    let ctx = TestContext::new();
    let mut server = completion_server::start();
    let mock = completion_server::expect_no_calls(&mut server);

    ctx.cli_with_endpoint(&completion_server::base_url(&server))
        .args(["plan", "--topic", "", "--students", "25", "--duration", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please answer all the questions."))
        .stderr(predicate::str::contains("Missing: topic"))
        .stderr(predicate::str::contains("Generating class plan").not());

    mock.assert();
}

#[test]
fn plan_lists_every_empty_answer() {
    let ctx = TestContext::new();
    let mut server = completion_server::start();
    let mock = completion_server::expect_no_calls(&mut server);

    ctx.cli_with_endpoint(&completion_server::base_url(&server))
        .args(["plan", "--topic", "", "--students", "", "--duration", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing: topic, students, duration"));

    mock.assert();
}

#[test]
fn plan_accepts_whitespace_answers() {
    let ctx = TestContext::new();
    let mut server = completion_server::start();
    let mock = completion_server::reply_with(&mut server, "plan");

    ctx.cli_with_endpoint(&completion_server::base_url(&server))
        .args(["plan", "--topic", " ", "--students", " ", "--duration", " "])
        .assert()
        .success();

    mock.assert();
}
