use crate::harness::{FRACTIONS_ARGS, TestContext};
use predicates::prelude::*;

#[test]
fn prompt_preview_prints_messages_without_endpoint() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(FRACTIONS_ARGS)
        .arg("--prompt-preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Prompt Preview ==="))
        .stdout(predicate::str::contains("Model: Meta-Llama-3.1-8b-Instruct"))
        .stdout(predicate::str::contains("Temperature: 0.7"))
        .stdout(predicate::str::contains("--- system ---"))
        .stdout(predicate::str::contains("You are a pedagogy expert"))
        .stdout(predicate::str::contains("--- user ---"))
        .stdout(predicate::str::contains(
            "Class topic: Fractions, Number of students: 25, Time available: 45, \
             Class level: Elementary, Modality: In-Person, Purpose: Intro, Reference materials: ",
        ));
}

#[test]
fn prompt_preview_still_validates_answers() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "--topic", "Fractions", "--students", "25", "--duration", ""])
        .arg("--prompt-preview")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing: duration"));
}

#[test]
fn prompt_preview_shows_reference_names_only() {
    let ctx = TestContext::new();
    let notes = ctx.write_file("notes.txt", "SECRET-CONTENT");
    let worksheet = ctx.write_file("worksheet.pdf", "%PDF-1.4");

    ctx.cli()
        .args(FRACTIONS_ARGS)
        .arg("--reference")
        .arg(&notes)
        .arg("--reference")
        .arg(&worksheet)
        .arg("--prompt-preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference materials: notes.txt, worksheet.pdf"))
        .stdout(predicate::str::contains("SECRET-CONTENT").not());
}
