#![allow(missing_docs)]

pub mod answers;
pub mod builtin;
pub mod content;
pub mod progress;
pub mod render;
pub mod spec;
pub mod summary;
pub mod validate;
pub mod visibility;

pub use answers::{AnswerError, AnswerSet, OptionValue, QuestionId};
pub use builtin::{BUILTIN_QUESTIONNAIRE, builtin_questionnaire};
pub use content::{
    GlossaryEntry, ProcessStep, Stepper, glossary, process_steps, search_glossary,
    term_count_label,
};
pub use progress::Progress;
pub use render::{DISCLAIMER, SUMMARY_TITLE, render_json, render_question_text, render_text};
pub use spec::{Dependency, FormSpec, OptionSpec, QuestionSpec, Questionnaire, Requirement};
pub use summary::{Route, RouteFlag, RouteFlags, RouteKind, Summary, derive_summary};
pub use validate::{SpecError, validate_form};
pub use visibility::{VisibleSequence, resolve_visibility, visible_answers};
