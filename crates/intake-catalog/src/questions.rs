//! Fixed open-ended questions asked outside the screening and module flow.

use std::sync::LazyLock;

use intake_core::models::module::Question;

pub fn overview() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        vec![
            Question::new(
                "OVERVIEW_01",
                "What brings you here today? Tell me about what has been on your mind.",
            ),
            Question::new(
                "OVERVIEW_02",
                "How have things been going for you day to day over the past few weeks?",
            ),
        ]
    });
    &QUESTIONS
}

pub fn timeline() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        vec![
            Question::new(
                "TIMELINE_01",
                "When did you first notice these difficulties, and how long have they lasted?",
            ),
            Question::new(
                "TIMELINE_02",
                "How much have these difficulties affected your work, school, or relationships?",
            ),
        ]
    });
    &QUESTIONS
}
