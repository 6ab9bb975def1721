#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

/// Specifies the reasons why a distributed evaluation or a training run can fail.
///
/// None of these are retried: a pure scoring function would just reproduce the same failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// Evaluation was requested in invalid state or with invalid parameters, e.g. dataset is not
    /// set or zero partitions are requested.
    Configuration(GenericError),
    /// There are no observations to evaluate against.
    EmptyDataset,
    /// A scoring function failed for some observation, no cost is produced.
    Scoring(GenericError),
    /// An underlying runtime failed, e.g. broadcast value is released before it is read.
    Runtime(GenericError),
}

/// A type alias for result type with `EvaluationError`.
pub type EvaluationResult<T> = Result<T, EvaluationError>;

impl EvaluationError {
    /// Creates a configuration error from the message.
    pub fn configuration(msg: impl Into<GenericError>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a runtime error from the message.
    pub fn runtime(msg: impl Into<GenericError>) -> Self {
        Self::Runtime(msg.into())
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "configuration error: {err}"),
            Self::EmptyDataset => write!(f, "cannot evaluate against empty dataset"),
            Self::Scoring(err) => write!(f, "scoring failure: {err}"),
            Self::Runtime(err) => write!(f, "runtime error: {err}"),
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for GenericError {
    fn from(value: EvaluationError) -> Self {
        Self(value.to_string())
    }
}
