use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::{self, Question};
use crate::error::AssessmentError;

/// Answers collected so far, keyed by question id.
///
/// Only ever holds answers that passed validation against the catalog, so a
/// value read back out is always in range for its question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    answers: BTreeMap<u8, u8>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer to one question.
    ///
    /// Unknown ids and values outside the question's scale are rejected; the
    /// set is left unchanged in that case.
    pub fn record(&mut self, question_id: u8, value: u8) -> Result<&mut Self, AssessmentError> {
        let question = validate(question_id, value)?;
        self.answers.insert(question.id, value);
        Ok(self)
    }

    /// Build a set from raw pairs, failing on the first invalid one.
    pub fn from_answers(
        answers: impl IntoIterator<Item = (u8, u8)>,
    ) -> Result<Self, AssessmentError> {
        let mut set = Self::new();
        for (question_id, value) in answers {
            set.record(question_id, value)?;
        }
        Ok(set)
    }

    pub fn get(&self, question_id: u8) -> Option<u8> {
        self.answers.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True iff every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Catalog question ids with no answer yet, in catalog order.
    pub fn missing(&self) -> Vec<u8> {
        catalog::questions()
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }
}

fn validate(question_id: u8, value: u8) -> Result<&'static Question, AssessmentError> {
    let question =
        catalog::question(question_id).ok_or(AssessmentError::UnknownQuestion(question_id))?;
    let scale = catalog::scale(question.category);
    if !scale.contains(value) {
        return Err(AssessmentError::AnswerOutOfRange {
            question_id,
            value,
            max: scale.max_value(),
        });
    }
    Ok(question)
}
