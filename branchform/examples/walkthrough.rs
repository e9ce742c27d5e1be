//! Walk the bundled job screening form down each of its paths.
//!
//! Pass a path to a form JSON document to lint it as well.
//! Set `RUST_LOG=branchform=debug` to see navigation decisions.

use anyhow::Context;
use branchform::{Form, ResponseLedger, ScriptedRespondent, Session, lint};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("branchform=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let form = example_forms::job_screening()?;
    let mut ledger = ResponseLedger::new();

    let applicants = [
        ScriptedRespondent::new()
            .with_text("role", "Engineering")
            .with_list("languages", ["Rust", "Python"])
            .with_answer(
                "skills",
                serde_json::json!({"Backend": [1, 2], "Infrastructure": [2, 1]}),
            )
            .with_text("start_date", "2026-11-02"),
        ScriptedRespondent::new()
            .with_text("role", "Sales")
            .with_text("quota", "800k")
            .with_text("start_date", "2026-12-01"),
        ScriptedRespondent::new()
            .with_text("role", "Other")
            .with_text("other_role", "Technical writer")
            .with_text("start_date", "2027-01-15"),
    ];

    println!("{}", form.title);
    for applicant in &applicants {
        let session = Session::new(&form).run(applicant)?;
        let path: Vec<_> = session.visible().iter().map(|q| q.id().to_string()).collect();
        let receipt = session.submit(&mut ledger)?;
        println!("  #{} asked: {}", receipt.serial, path.join(" -> "));
    }

    if let Some(file) = std::env::args().nth(1) {
        let json = std::fs::read_to_string(&file).with_context(|| format!("reading {file}"))?;
        let form = Form::from_json(&json).with_context(|| format!("parsing {file}"))?;
        let issues = lint(&form);
        if issues.is_empty() {
            println!("{file}: no branching issues");
        }
        for issue in issues {
            println!("{file}: {issue}");
        }
    }

    Ok(())
}
