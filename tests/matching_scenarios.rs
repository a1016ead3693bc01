use matching_quiz::quiz::matching::SelectionState;
use matching_quiz::terminal::{Command, Outcome, Session, TerminalView};
use matching_quiz::{
    AnnouncementSink, AnswerKey, MatchingQuestion, Pair, QuizConfig, Side, ViewAdapter,
};

#[derive(Default)]
struct Announcements(Vec<bool>);

impl AnnouncementSink for Announcements {
    fn announce(&mut self, is_correct: bool) {
        self.0.push(is_correct);
    }
}

fn food_key() -> AnswerKey {
    AnswerKey::new([
        ("apple", "fruit"),
        ("carrot", "vegetable"),
        ("salmon", "protein"),
    ])
}

#[test]
fn food_scenario_grades_only_when_complete() {
    let key = food_key();
    let mut view = TerminalView::from_answer_key(&key);
    let mut question = MatchingQuestion::new(key);
    let mut sink = Announcements::default();

    question.activate(&mut view, "apple", Side::Left);
    question.activate(&mut view, "fruit", Side::Right);
    assert_eq!(question.matches().entries(), &[Pair::new("apple", "fruit")]);
    assert!(!question.grade(&mut view, &mut sink));
    assert_eq!(view.feedback(), Some(("❌ Incorrect.", false)));

    question.activate(&mut view, "carrot", Side::Left);
    question.activate(&mut view, "vegetable", Side::Right);
    question.activate(&mut view, "salmon", Side::Left);
    question.activate(&mut view, "protein", Side::Right);

    assert!(question.grade(&mut view, &mut sink));
    assert_eq!(view.feedback(), Some(("✅ Correct!", true)));
    assert_eq!(sink.0, vec![false, true]);
    assert_eq!(view.lines().len(), 3);
}

#[test]
fn same_side_pick_reselects_without_pairing() {
    let key = food_key();
    let mut view = TerminalView::from_answer_key(&key);
    let mut question = MatchingQuestion::new(key);

    question.activate(&mut view, "apple", Side::Left);
    let pair = question.activate(&mut view, "carrot", Side::Left);

    assert_eq!(pair, None);
    assert!(question.matches().is_empty());
    assert_eq!(
        question.selection(),
        &SelectionState::Pending {
            id: "carrot".to_string(),
            side: Side::Left
        }
    );
    let carrot = view.resolve_item("carrot", Side::Left).unwrap();
    let apple = view.resolve_item("apple", Side::Left).unwrap();
    assert!(view.is_pending(&carrot));
    assert!(!view.is_pending(&apple));
}

#[test]
fn reveal_grades_correct_and_reset_grades_incorrect() {
    let key = food_key();
    let mut view = TerminalView::from_answer_key(&key);
    let mut question = MatchingQuestion::new(key);
    let mut sink = Announcements::default();

    question.reveal_answer(&mut view);
    assert_eq!(view.feedback(), Some(("✅ Correct matches shown.", true)));
    assert!(question.grade(&mut view, &mut sink));

    question.reset(&mut view);
    assert!(view.lines().is_empty());
    assert_eq!(view.feedback(), None);
    assert!(!question.grade(&mut view, &mut sink));
}

#[test]
fn lines_survive_a_reshuffle_after_redraw() {
    let key = food_key();
    let mut view = TerminalView::from_answer_key(&key);
    let mut question = MatchingQuestion::new(key);

    question.reveal_answer(&mut view);
    view.shuffle_columns(&mut rand::thread_rng());
    assert_eq!(question.redraw(&mut view), 3);

    let board = view.render();
    for (left, right) in [("apple", "fruit"), ("carrot", "vegetable"), ("salmon", "protein")] {
        let row = board
            .lines()
            .find(|line| line.trim_start().starts_with(left))
            .unwrap();
        assert!(row.contains(&format!("--> {}", right)), "{}", row);
    }
}

#[test]
fn session_walks_through_the_default_quiz() {
    let config = QuizConfig::default();
    let mut session = Session::with_view(&config, TerminalView::from_answer_key(&config.matching));

    for line in [
        "right fruit",
        "left apple",
        "key left carrot Enter",
        "key right vegetable space",
        "l salmon",
        "r protein",
    ] {
        let command = line.parse::<Command>().unwrap();
        assert!(matches!(session.execute(command), Outcome::Continue(_)));
    }

    let Outcome::Continue(board) = session.execute(Command::Grade) else {
        panic!("grade ended the session");
    };
    assert!(board.contains("✅ Correct!"));
    assert!(board.contains("(announced: Correct answer)"));
    assert_eq!(session.quiz().matching.matches().len(), 3);
}

#[test]
fn answers_command_lists_every_question() {
    let config = QuizConfig::default();
    let mut session = Session::with_view(&config, TerminalView::from_answer_key(&config.matching));

    let Outcome::Continue(text) = session.execute(Command::Answers) else {
        panic!("answers ended the session");
    };

    assert!(text.starts_with("✅ All correct answers revealed!"));
    assert!(text.contains("odd: 1, 3, 5"));
    assert!(text.contains("even: 2, 4"));
    assert!(text.contains("-5@-5"));
    assert!(text.contains("✅ Correct placements shown."));
    assert!(text.contains("What is the capital of France? Paris"));
    assert!(text.contains("Which of these are prime numbers? 2, 3"));
    assert!(text.contains("The Earth orbits the Sun. True"));
    assert_eq!(session.view().lines().len(), 3);
}

#[test]
fn boards_are_graded_and_reset_with_the_page() {
    let config = QuizConfig::default();
    let mut session = Session::with_view(&config, TerminalView::from_answer_key(&config.matching));

    for line in [
        "sort 1 odd",
        "sort 3 odd",
        "sort 5 odd",
        "sort 2 even",
        "sort 4 even",
        "place -5 -5",
        "place -2 -2",
        "place 0 0",
        "place 1 1",
        "place 4 4",
        "left apple",
        "right fruit",
    ] {
        let command = line.parse::<Command>().unwrap();
        session.execute(command);
    }

    let Outcome::Continue(board) = session.execute(Command::GradeSorting) else {
        panic!("grading ended the session");
    };
    assert!(board.contains("[correct] ✅ All correctly categorized!"));

    let Outcome::Continue(board) = session.execute(Command::GradeLine) else {
        panic!("grading ended the session");
    };
    assert!(board.contains("[correct] ✅ Perfect! All numbers are correctly placed."));

    session.execute(Command::Reset);
    let quiz = session.quiz();
    assert!(quiz.matching.matches().is_empty());
    assert!(quiz.sorting.is_empty());
    assert_eq!(quiz.sorting.pool.len(), 5);
    assert!(quiz.line.is_empty());
    assert_eq!(quiz.line.collection.len(), 5);
}
