use crate::spec::form::Questionnaire;
use crate::validate::SpecError;

/// Definition of the Ontario Will self-assessment shipped with the crate.
pub const BUILTIN_QUESTIONNAIRE: &str = include_str!("../assets/ontario_will.json");

pub fn builtin_questionnaire() -> Result<Questionnaire, SpecError> {
    Questionnaire::from_json(BUILTIN_QUESTIONNAIRE)
}

/// Question ids the summary rules are keyed on.
pub mod ids {
    pub const AGE_18: &str = "age18";
    pub const MINOR_EXCEPTION: &str = "minorException";
    pub const SPECIFIC_GIFTS: &str = "specificGifts";
    pub const MINOR_KIDS: &str = "minorKids";
    pub const SPOUSE_STATUS: &str = "spouseStatus";
    pub const CAN_WITNESS: &str = "canWitness";
    pub const REMOTE_OPTION: &str = "remoteOption";
    pub const HANDWRITE: &str = "handwrite";
    pub const STORAGE_PLAN: &str = "storagePlan";
}

pub mod values {
    pub const YES: &str = "yes";
    pub const NO: &str = "no";
    pub const SINGLE: &str = "single";
    pub const MARRIED: &str = "married";
    pub const COMMON_LAW: &str = "commonlaw";
}
