use super::*;

#[test]
fn accepts_answer_across_midnight() {
    let check = AnswerCheck::from_fields(23, 59, 0, 1);
    assert_eq!(check.difference_minutes, 2);
    assert!(check.correct);
}

#[test]
fn accepts_unchanged_starting_time() {
    let start = ClockTime::from_hm(10, 10);
    let check = AnswerCheck::new(start, ClockTime::from_hm(10, 10));
    assert_eq!(check.difference_minutes, 0);
    assert!(check.correct);
}

#[test]
fn rejects_answer_five_minutes_off() {
    let check = AnswerCheck::from_fields(3, 5, 3, 0);
    assert_eq!(check.difference_minutes, 5);
    assert!(!check.correct);
}

#[test]
fn tolerance_boundary_is_inclusive_at_two() {
    let target = ClockTime::from_hm(3, 0);
    assert!(is_answer_correct(ClockTime::from_hm(3, 2), target));
    assert!(is_answer_correct(ClockTime::from_hm(2, 58), target));
    assert!(!is_answer_correct(ClockTime::from_hm(3, 3), target));
    assert!(!is_answer_correct(ClockTime::from_hm(2, 57), target));
}

#[test]
fn wrapped_difference_is_symmetric_and_bounded() {
    for (a, b) in [(0, 1439), (100, 900), (720, 0), (5, 5)] {
        let (a, b) = (ClockTime::from_minutes(a), ClockTime::from_minutes(b));
        let d = wrapped_difference(a, b);
        assert_eq!(d, wrapped_difference(b, a));
        assert!((0..=720).contains(&d));
    }
    assert_eq!(
        wrapped_difference(ClockTime::MIDNIGHT, ClockTime::from_minutes(1439)),
        1
    );
}

#[test]
fn fallback_question_is_noon() {
    let fallback = QuizQuestion::fallback();
    assert_eq!(fallback.target(), ClockTime::NOON);
    assert_eq!(fallback.hint, "Both hands point up!");
}

#[test]
fn question_uses_camel_case_wire_names() {
    let question: QuizQuestion = serde_json::from_str(
        r#"{"questionText":"Show half past four","targetHour":16,"targetMinute":30,"hint":"Little hand between 4 and 5"}"#,
    )
    .expect("parse question");
    assert_eq!(question.target(), ClockTime::from_hm(16, 30));
    assert!(question.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_targets() {
    let mut question = QuizQuestion::fallback();
    question.target_hour = 24;
    assert_eq!(
        question.clone().validate(),
        Err(QuizQuestionError::HourOutOfRange(24))
    );
    question.target_hour = 1;
    question.target_minute = 60;
    assert_eq!(
        question.clone().validate(),
        Err(QuizQuestionError::MinuteOutOfRange(60))
    );
    question.target_minute = 0;
    question.question_text = "  ".to_string();
    assert_eq!(question.validate(), Err(QuizQuestionError::EmptyText));
}
