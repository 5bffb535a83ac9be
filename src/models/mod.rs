pub mod loaders;
pub mod question;

pub use loaders::load_questions;
pub use question::{AnswerRecord, Question, FAILURE_SENTINEL};
