pub mod assessment;
pub mod progress;
pub mod severity;
pub mod therapy;
