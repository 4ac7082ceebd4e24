use thiserror::Error;

/// Raised when text from a CLI flag, config file or action script does not
/// name a value of the closed filter domains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("unknown consultation mode '{0}' (expected video or clinic)")]
    UnknownConsultationMode(String),
    #[error("unknown sort key '{0}' (expected fees or experience)")]
    UnknownSortKey(String),
    #[error("unknown specialty '{0}'")]
    UnknownSpecialty(String),
    #[error("unknown section '{0}' (expected sort, speciality or moc)")]
    UnknownSection(String),
    #[error("malformed filter action '{0}'")]
    MalformedAction(String),
}
