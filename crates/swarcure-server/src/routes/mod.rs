pub mod assessments;
pub mod health;
pub mod music;
pub mod progress;
pub mod questionnaire;
pub mod recommendations;

use swarcure_core::user::UserId;

use crate::error::ApiError;

fn parse_user(raw: String) -> Result<UserId, ApiError> {
    Ok(UserId::parse(raw)?)
}
