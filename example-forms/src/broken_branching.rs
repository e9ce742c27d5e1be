use branchform_types::{
    Branching, ChoiceOption, ChoiceQuestion, Form, Question, QuestionKind, TextQuestion,
};

fn text(id: &str) -> Question {
    Question::new(id, id, QuestionKind::Text(TextQuestion::new()))
}

/// Rules that point backwards, including a self-loop and a two-question cycle.
pub fn cyclic() -> Form {
    Form::new(
        "cyclic",
        "Going in circles",
        vec![
            text("a").branch(Branching::to("b")),
            text("b").branch(Branching::to("a")),
            Question::new(
                "c",
                "c",
                QuestionKind::SingleChoice(ChoiceQuestion::new(vec![
                    ChoiceOption::new("again", "Again").branch(Branching::to("c")),
                    ChoiceOption::new("back", "Back").branch(Branching::to("a")),
                ])),
            )
            .with_branching_enabled(true),
            text("d"),
        ],
    )
}

/// Rules that name questions which do not exist.
pub fn dangling() -> Form {
    Form::new(
        "dangling",
        "Nowhere to go",
        vec![
            text("a").branch(Branching::to("deleted-question")),
            text("b"),
            text("c").branch(Branching::to("")),
        ],
    )
}
