use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which total a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    /// PHQ-9 style mood items.
    Mental,
    /// Somatic symptom items.
    Physical,
    /// Single functional-impact item, scored on its own.
    Impact,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mental => "mental",
            Category::Physical => "physical",
            Category::Impact => "impact",
        }
    }

    /// Largest possible total for the category.
    pub fn max_score(self) -> u8 {
        let count = questions().iter().filter(|q| q.category == self).count() as u8;
        count * scale(self).max_value()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u8,
    pub text: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

/// Ordered answer options for one category of question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerScale {
    pub id: String,
    pub options: Vec<AnswerOption>,
}

impl AnswerScale {
    pub fn max_value(&self) -> u8 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    pub fn contains(&self, value: u8) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn label(&self, value: u8) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// Number of questions a complete response set must answer.
pub const QUESTION_COUNT: usize = 19;

/// All questions, in presentation order.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        let items = [
            (1, "Little interest or pleasure in doing things", Category::Mental),
            (2, "Feeling down, depressed, or hopeless", Category::Mental),
            (3, "Trouble falling or staying asleep, or sleeping too much", Category::Mental),
            (4, "Feeling tired or having little energy", Category::Mental),
            (5, "Poor appetite or overeating", Category::Mental),
            (
                6,
                "Feeling bad about yourself, or that you are a failure or let others down",
                Category::Mental,
            ),
            (
                7,
                "Trouble concentrating on things like reading or watching TV",
                Category::Mental,
            ),
            (
                8,
                "Moving or speaking slowly, or being unusually fidgety or restless",
                Category::Mental,
            ),
            (
                9,
                "Thoughts that you'd be better off dead or of hurting yourself",
                Category::Mental,
            ),
            (10, "Headaches, tension, or pressure in the head", Category::Physical),
            (11, "Unexplained muscle aches or body pain", Category::Physical),
            (12, "Stomachaches, indigestion, or nausea", Category::Physical),
            (
                13,
                "Racing heart or chest tightness (not due to physical exertion)",
                Category::Physical,
            ),
            (14, "Shortness of breath or trouble breathing", Category::Physical),
            (15, "Dizziness or feeling faint", Category::Physical),
            (
                16,
                "Sweating, shaking, or trembling without physical cause",
                Category::Physical,
            ),
            (
                17,
                "Feeling exhausted even after resting or sleeping",
                Category::Physical,
            ),
            (18, "Clenching your jaw or grinding your teeth", Category::Physical),
            (
                19,
                "If you checked any problems, how difficult have these made your daily life (work, home, relationships)?",
                Category::Impact,
            ),
        ];

        items
            .iter()
            .map(|(id, text, category)| Question {
                id: *id,
                text: text.to_string(),
                category: *category,
            })
            .collect()
    });
    &QUESTIONS
}

pub fn question(id: u8) -> Option<&'static Question> {
    questions().iter().find(|q| q.id == id)
}

/// The answer scale used by questions of `category`.
pub fn scale(category: Category) -> &'static AnswerScale {
    static FREQUENCY: LazyLock<AnswerScale> = LazyLock::new(|| {
        answer_scale(
            "frequency",
            &[
                "Not at all",
                "Several days",
                "More than half the days",
                "Nearly every day",
            ],
        )
    });
    static DIFFICULTY: LazyLock<AnswerScale> = LazyLock::new(|| {
        answer_scale(
            "difficulty",
            &[
                "Not difficult at all",
                "Somewhat difficult",
                "Very difficult",
                "Extremely difficult",
            ],
        )
    });

    match category {
        Category::Mental | Category::Physical => &FREQUENCY,
        Category::Impact => &DIFFICULTY,
    }
}

fn answer_scale(id: &str, labels: &[&str]) -> AnswerScale {
    AnswerScale {
        id: id.to_string(),
        options: labels
            .iter()
            .enumerate()
            .map(|(value, label)| AnswerOption {
                value: value as u8,
                label: label.to_string(),
            })
            .collect(),
    }
}
