pub mod answer_writer;
pub mod validator;

pub use answer_writer::{read_answers, write_answers};
pub use validator::validate_results;
