pub mod dependency;
pub mod form;
pub mod question;

pub use dependency::{Dependency, Requirement};
pub use form::{FormSpec, Questionnaire};
pub use question::{OptionSpec, QuestionSpec};
