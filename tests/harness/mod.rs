#![allow(dead_code, unused_imports)]

pub(crate) mod completion_server;

pub(crate) use test_context::TestContext;

/// Flags for a complete, valid form.
pub(crate) const FRACTIONS_ARGS: [&str; 13] = [
    "plan",
    "--topic",
    "Fractions",
    "--students",
    "25",
    "--duration",
    "45",
    "--level",
    "Elementary",
    "--modality",
    "in-person",
    "--purpose",
    "Intro",
];
