use quiz_core::model::{
    Language, LevelCatalog, LevelId, Page, QuestionOutcome, QuizResult, UserProfile,
};
use quiz_core::time::fixed_now;
use services::{Action, Clock, SessionController, SessionError};

fn outcome(idx: usize, correct: bool) -> QuestionOutcome {
    QuestionOutcome {
        prompt: format!("Q{idx}"),
        expected: "1".into(),
        given: if correct { "1".into() } else { "0".into() },
        correct,
    }
}

#[test]
fn full_session_round_trip() {
    let mut session = SessionController::new(LevelCatalog::standard(), UserProfile::seed())
        .with_clock(Clock::fixed(fixed_now()));

    session.select_level(LevelId::Beginner).unwrap();
    assert_eq!(session.page(), Page::QuizSetup);

    session.start_quiz(15).unwrap();
    let count = session.settings().unwrap().number_of_questions().get();
    assert_eq!(count, 15);

    let outcomes = (0..15).map(|idx| outcome(idx, idx % 3 != 0)).collect();
    let result = QuizResult::from_outcomes(outcomes).unwrap();
    assert_eq!(result.correct_answers(), 10);
    session.complete_quiz(result).unwrap();

    // (78 * 24 + 66.67) / 25 = 77.55 -> 78
    let profile = session.profile();
    assert_eq!(profile.total_points(), 1350);
    assert_eq!(profile.total_quizzes(), 25);
    assert_eq!(profile.average_score(), 78);
    assert_eq!(session.result().unwrap().outcomes().len(), 15);

    session.restart().unwrap();
    session.complete_quiz(QuizResult::new(0, 15).unwrap()).unwrap();
    // (78 * 25 + 0) / 26 = 75.0
    assert_eq!(session.profile().average_score(), 75);
    assert_eq!(session.attempt(), Some(2));

    session.go_home();
    assert_eq!(session.page(), Page::Home);
    assert!(session.result().is_none());

    let final_profile = session.into_profile();
    assert_eq!(final_profile.total_quizzes(), 26);
    assert_eq!(final_profile.achievements(), 5);
}

#[test]
fn invalid_result_is_rejected_before_folding() {
    let mut session = SessionController::new(LevelCatalog::standard(), UserProfile::seed());
    session.select_level(LevelId::Advanced).unwrap();
    session.start_quiz(10).unwrap();

    let bad: Result<QuizResult, _> =
        serde_json::from_str(r#"{"correctAnswers":11,"totalQuestions":10}"#);
    assert!(bad.is_err());

    let err = session.complete_quiz_with_counts(11, 10).unwrap_err();
    assert!(matches!(err, SessionError::InvalidResult(_)));

    assert_eq!(session.page(), Page::Quiz);
    assert_eq!(session.profile(), &UserProfile::seed());
}

#[test]
fn language_toggle_is_session_wide() {
    let mut session = SessionController::new(LevelCatalog::standard(), UserProfile::seed())
        .with_language(Language::Tamil);
    session.navigate(Page::About).unwrap();
    session.toggle_language();
    assert_eq!(session.language(), Language::English);
    assert_eq!(session.page(), Page::About);

    session.go_home();
    session.select_level(LevelId::Intermediate).unwrap();
    assert_eq!(session.settings().unwrap().language(), Language::English);
}

#[test]
fn results_are_unreachable_without_a_quiz() {
    let mut session = SessionController::new(LevelCatalog::standard(), UserProfile::seed());
    session.select_level(LevelId::Beginner).unwrap();
    let err = session
        .complete_quiz(QuizResult::new(1, 1).unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidTransition {
            page: Page::QuizSetup,
            action: Action::CompleteQuiz
        }
    );
    assert_eq!(session.profile().total_quizzes(), 24);
}
