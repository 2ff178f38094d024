use thiserror::Error;

use crate::catalog::Category;
use crate::session::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("unknown question: {0}")]
    UnknownQuestion(u8),

    #[error("answer {value} to question {question_id} is outside range [0, {max}]")]
    AnswerOutOfRange { question_id: u8, value: u8, max: u8 },

    #[error("assessment incomplete, unanswered questions: {missing:?}")]
    Incomplete { missing: Vec<u8> },

    #[error("session is {phase}, answers can no longer be recorded")]
    SessionClosed { phase: Phase },

    #[error("session step out of order: expected {expected}, session is {actual}")]
    OutOfOrder { expected: Phase, actual: Phase },

    #[error("{category} score {score} is outside range [0, {max}]")]
    ScoreOutOfRange {
        category: Category,
        score: u8,
        max: u8,
    },
}
