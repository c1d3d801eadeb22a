mod question;

pub use question::{Question, QuestionError, QuestionRecord};
