use crate::harness::{FRACTIONS_ARGS, TestContext};
use predicates::prelude::*;

#[test]
fn plan_fails_before_prompting_without_base_url() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LLAMA_BASE_URL environment variable not set"))
        .stdout(predicate::str::contains("Welcome teacher").not());
}

#[test]
fn plan_fails_without_api_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("LLAMA_BASE_URL", "https://llm.example.com/v1")
        .args(FRACTIONS_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("LLAMA_API_KEY environment variable not set"));
}

#[test]
fn plan_rejects_invalid_base_url() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("LLAMA_BASE_URL", "not a url")
        .env("LLAMA_API_KEY", "test-key")
        .args(FRACTIONS_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("LLAMA_BASE_URL is not a valid URL"));
}

#[test]
fn plan_rejects_missing_settings_file() {
    let ctx = TestContext::new();

    ctx.cli_with_endpoint("https://llm.example.com/v1")
        .args(FRACTIONS_ARGS)
        .args(["--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn plan_rejects_invalid_settings() {
    let ctx = TestContext::new();
    ctx.write_settings("[completion]\ntemperature = 3.0\n");

    ctx.cli_with_endpoint("https://llm.example.com/v1")
        .args(FRACTIONS_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("completion.temperature"));
}
