//! Integration tests for branchform

use branchform::{
    AnswerError, AnswerValue, Answers, BranchIssue, BranchTarget, Branching, ChoiceOption,
    ChoiceQuestion, Form, FormError, Navigation, Question, QuestionKind, Receipt, ResponseLedger,
    RuleSite, ScriptError, ScriptedRespondent, Session, SessionError, StoredResponse, Termination,
    TextQuestion, lint, navigate, run_session, visible_questions,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<Form>();
    assert_send_sync::<Question>();
    assert_send_sync::<Answers>();
    assert_send_sync::<AnswerValue>();
    assert_send_sync::<BranchTarget>();
    assert_send_sync::<Navigation<'static>>();
    assert_send_sync::<Session<'static>>();
    assert_send_sync::<ResponseLedger>();
    assert_send_sync::<ScriptedRespondent>();
    assert_send_sync::<Receipt>();
    assert_send_sync::<StoredResponse>();
    assert_send_sync::<RuleSite>();
    assert_send_sync::<BranchIssue>();
    assert_send_sync::<FormError>();
    assert_send_sync::<SessionError>();
    assert_send_sync::<AnswerError>();
    assert_send_sync::<ScriptError>();
}

fn text(id: &str) -> Question {
    Question::new(id, id, QuestionKind::Text(TextQuestion::new()))
}

fn choice(id: &str, options: Vec<ChoiceOption>) -> Question {
    Question::new(id, id, QuestionKind::SingleChoice(ChoiceQuestion::new(options)))
        .with_branching_enabled(true)
}

fn ids(questions: &[&Question]) -> Vec<String> {
    questions.iter().map(|q| q.id().to_string()).collect()
}

fn yes_skips_b() -> Vec<Question> {
    vec![
        choice(
            "A",
            vec![
                ChoiceOption::new("yes", "Yes").branch(Branching::to("C")),
                ChoiceOption::new("no", "No").branch(Branching::next()),
            ],
        ),
        text("B"),
        text("C"),
    ]
}

#[test]
fn no_branching_shows_everything() {
    let questions = vec![text("A"), text("B"), text("C")];
    assert_eq!(
        ids(&visible_questions(&questions, &Answers::new())),
        ["A", "B", "C"]
    );
}

#[test]
fn yes_jumps_over_b() {
    let answers = Answers::new().with("A", "Yes");
    assert_eq!(ids(&visible_questions(&yes_skips_b(), &answers)), ["A", "C"]);
}

#[test]
fn no_falls_through() {
    let answers = Answers::new().with("A", "No");
    assert_eq!(
        ids(&visible_questions(&yes_skips_b(), &answers)),
        ["A", "B", "C"]
    );
}

#[test]
fn question_level_end() {
    let questions = vec![text("A").branch(Branching::end()), text("B"), text("C")];
    let nav = navigate(&questions, &Answers::new());
    assert_eq!(ids(nav.visible()), ["A"]);
    assert_eq!(nav.termination(), &Termination::Ended { at: "A".into() });
}

#[test]
fn self_reference_advances() {
    let questions = vec![text("A").branch(Branching::to("A"))];
    let nav = navigate(&questions, &Answers::new());
    assert_eq!(ids(nav.visible()), ["A"]);
    assert_eq!(nav.termination(), &Termination::Exhausted);
}

#[test]
fn unmatched_answer_falls_back_to_next() {
    let questions = vec![
        choice(
            "A",
            vec![
                ChoiceOption::new("x", "X").branch(Branching::end()),
                ChoiceOption::new("y", "Y").branch(Branching::end()),
            ],
        ),
        text("B"),
    ];
    let answers = Answers::new().with("A", "Z");
    assert_eq!(ids(&visible_questions(&questions, &answers)), ["A", "B"]);
}

#[test]
fn customer_feedback_paths() {
    let form = example_forms::customer_feedback();
    let path = |answers: Answers| ids(&visible_questions(form.questions(), &answers));

    assert_eq!(
        path(Answers::new().with("satisfied", "Very satisfied")),
        ["satisfied", "recommend"]
    );
    assert_eq!(
        path(Answers::new().with("satisfied", "Satisfied")),
        ["satisfied", "liked", "recommend"]
    );
    assert_eq!(
        path(
            Answers::new()
                .with("satisfied", "Unsatisfied")
                .with("contact_ok", "No")
        ),
        ["satisfied", "complaint", "contact_ok"]
    );
    assert_eq!(
        path(
            Answers::new()
                .with("satisfied", "Unsatisfied")
                .with("contact_ok", "Yes")
        ),
        ["satisfied", "complaint", "contact_ok", "email", "recommend"]
    );
}

#[test]
fn job_screening_from_json() {
    let form = example_forms::job_screening().unwrap();
    let path = |answers: Answers| ids(&visible_questions(form.questions(), &answers));

    // The question-level "end" applies until the choice is answered.
    assert_eq!(path(Answers::new()), ["role"]);
    assert_eq!(
        path(Answers::new().with("role", "Engineering")),
        ["role", "languages", "skills", "start_date", "cv"]
    );
    assert_eq!(
        path(Answers::new().with("role", "Sales")),
        ["role", "quota", "start_date", "cv"]
    );
    assert_eq!(
        path(Answers::new().with("role", "Other")),
        ["role", "other_role", "start_date", "cv"]
    );
    // An unmatched answer does not fall back to the question-level "end".
    assert_eq!(
        path(Answers::new().with("role", "Marketing")),
        ["role", "other_role", "start_date", "cv"]
    );
}

#[test]
fn broken_forms_still_terminate() {
    let cyclic = example_forms::cyclic();
    for answer in ["Again", "Back", "Neither"] {
        let answers = Answers::new().with("c", answer);
        assert_eq!(
            ids(&visible_questions(cyclic.questions(), &answers)),
            ["a", "b", "c", "d"]
        );
    }

    let dangling = example_forms::dangling();
    assert_eq!(
        ids(&visible_questions(dangling.questions(), &Answers::new())),
        ["a", "b", "c"]
    );
}

#[test]
fn lint_reports_broken_forms() {
    assert_eq!(lint(&example_forms::cyclic()).len(), 3);
    assert_eq!(lint(&example_forms::dangling()).len(), 2);
    assert!(lint(&example_forms::customer_feedback()).is_empty());
    assert!(lint(&example_forms::event_registration()).is_empty());
    assert!(lint(&example_forms::job_screening().unwrap()).is_empty());
}

#[test]
fn scripted_run_follows_online_path() {
    let form = example_forms::event_registration();
    let respondent = ScriptedRespondent::new()
        .with_text("attending", "Online")
        .with_list("topics", ["Async", "Web", "Embedded"])
        .with_text("experience", "4");

    let answers = run_session(&form, &respondent).unwrap();

    assert_eq!(
        ids_of(&respondent.asked()),
        ["attending", "topics", "experience", "photo", "talk", "comments"]
    );
    assert!(!answers.contains(&example_forms::SHIRT_SIZE.into()));
    assert!(!answers.contains(&example_forms::COMMENTS.into()));
}

fn ids_of(asked: &[branchform::QuestionId]) -> Vec<String> {
    asked.iter().map(ToString::to_string).collect()
}

#[test]
fn scripted_run_missing_required_answer() {
    let form = example_forms::event_registration();
    let respondent = ScriptedRespondent::new().with_text("attending", "In person");

    let err = run_session(&form, &respondent).unwrap_err();
    let SessionError::Respondent(inner) = err else {
        panic!("expected a respondent error");
    };
    assert!(matches!(
        inner.downcast_ref::<ScriptError>(),
        Some(ScriptError::MissingAnswer(id)) if id.as_str() == example_forms::SHIRT_SIZE
    ));
}

#[test]
fn scripted_blank_for_required_question_is_refused() {
    let form = Form::new("contact", "Contact", vec![text("name").required()]);
    let respondent = ScriptedRespondent::new().with_text("name", "");

    let err = run_session(&form, &respondent).unwrap_err();
    assert!(matches!(err, SessionError::BlankAnswer(id) if id.as_str() == "name"));
    assert_eq!(ids_of(&respondent.asked()), ["name"]);

    let session = Session::with_answers(&form, Answers::new().with("name", "   "));
    assert!(!session.is_complete());
    assert!(!session.can_submit());
}

#[test]
fn scripted_run_on_cyclic_form_terminates() {
    let form = example_forms::cyclic();
    let respondent = ScriptedRespondent::new().with_text("c", "Back");
    let answers = run_session(&form, &respondent).unwrap();

    assert_eq!(ids_of(&respondent.asked()), ["a", "b", "c", "d"]);
    assert_eq!(answers.len(), 1);
}

#[test]
fn not_attending_submits_immediately() {
    let form = example_forms::event_registration();
    let mut ledger = ResponseLedger::new();

    let mut session = Session::new(&form);
    session.answer("attending", "Not attending").unwrap();
    assert!(session.navigation().ended_early());
    assert!(session.is_complete());

    let receipt = session.submit(&mut ledger).unwrap();
    assert_eq!(receipt.serial, 1);
    assert_eq!(receipt.form_id, form.id);
}

#[test]
fn submission_waits_for_required_answers() {
    let form = example_forms::customer_feedback();
    let mut ledger = ResponseLedger::new();

    let mut session = Session::new(&form);
    session.answer("satisfied", "Unsatisfied").unwrap();
    session.answer("contact_ok", "Yes").unwrap();

    let missing: Vec<String> = session
        .missing_required()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(missing, ["complaint", "email", "recommend"]);

    let err = session.clone().submit(&mut ledger).unwrap_err();
    assert!(err.is_missing_required());
    assert_eq!(ledger.count(&form.id), 0);

    session.answer("complaint", "Arrived broken").unwrap();
    session.answer("email", "me@example.com").unwrap();
    session.answer("recommend", "3").unwrap();
    assert_eq!(session.submit(&mut ledger).unwrap().serial, 1);
}

#[test]
fn receipts_count_per_form() -> anyhow::Result<()> {
    let feedback = example_forms::customer_feedback();
    let screening = example_forms::job_screening()?;
    let mut ledger = ResponseLedger::new();

    for expected in 1..=3 {
        let answers = run_session(
            &feedback,
            &ScriptedRespondent::new()
                .with_text("satisfied", "Very satisfied")
                .with_text("recommend", "10"),
        )?;
        let receipt = Session::with_answers(&feedback, answers).submit(&mut ledger)?;
        assert_eq!(receipt.serial, expected);
    }

    let answers = run_session(
        &screening,
        &ScriptedRespondent::new()
            .with_text("role", "Sales")
            .with_text("quota", "1.2M")
            .with_text("start_date", "2026-01-05"),
    )?;
    let receipt = Session::with_answers(&screening, answers).submit(&mut ledger)?;
    assert_eq!(receipt.serial, 1);
    assert_eq!(ledger.count(&feedback.id), 3);

    Ok(())
}

#[test]
fn form_documents_round_trip_through_json() {
    let form = example_forms::event_registration();
    let json = form.to_json().unwrap();
    let parsed = Form::from_json(&json).unwrap();
    assert_eq!(parsed, form);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["questions"][1]["type"], "single-choice");
    assert_eq!(value["questions"][1]["enableBranching"], true);
    assert_eq!(
        value["questions"][1]["options"][2]["branching"]["nextQuestionId"],
        "end"
    );
}
