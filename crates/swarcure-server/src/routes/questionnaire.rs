use axum::Json;
use serde::Serialize;

use swarcure_instruments::catalog::{self, AnswerScale, Category, Question};

#[derive(Serialize)]
pub struct CategoryScale {
    category: Category,
    max_score: u8,
    scale: AnswerScale,
}

#[derive(Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
    scales: Vec<CategoryScale>,
}

pub async fn get_questionnaire() -> Json<Questionnaire> {
    let scales = [Category::Mental, Category::Physical, Category::Impact]
        .into_iter()
        .map(|category| CategoryScale {
            category,
            max_score: category.max_score(),
            scale: catalog::scale(category).clone(),
        })
        .collect();

    Json(Questionnaire {
        questions: catalog::questions().to_vec(),
        scales,
    })
}
