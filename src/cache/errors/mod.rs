use std::error::Error;
use std::fmt::{Display, Formatter};

const ERROR_MESSAGE_TOTAL_CAPACITY_GT_ZERO: &str = "Total capacity must be greater than zero";
const ERROR_MESSAGE_TIME_TO_LIVE_GT_ZERO: &str = "Time to live must be greater than zero";
const ERROR_MESSAGE_PUT_AFTER_SHUTDOWN: &str = "could not accept the entry, probably the cache is being shutdown";

/// Errors enum defines the various application errors.
/// Errors are categorized either as ConfigError or OperationError under the [`ErrorType`] enum.
#[derive(Eq, PartialEq, Debug)]
pub enum Errors {
    TotalCapacityGtZero,
    TimeToLiveGtZero,
    PutAfterShutdown,
}

pub(crate) enum ErrorType {
    ConfigError,
    OperationError(&'static str),
}

impl Display for ErrorType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorType::ConfigError =>
                write!(formatter, "Config error"),
            ErrorType::OperationError(operation) =>
                write!(formatter, "Operation {}", operation),
        }
    }
}

impl Display for Errors {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Errors::TotalCapacityGtZero =>
                write!(formatter, "[{}]: {}", ErrorType::ConfigError, ERROR_MESSAGE_TOTAL_CAPACITY_GT_ZERO),
            Errors::TimeToLiveGtZero =>
                write!(formatter, "[{}]: {}", ErrorType::ConfigError, ERROR_MESSAGE_TIME_TO_LIVE_GT_ZERO),
            Errors::PutAfterShutdown =>
                write!(formatter, "[{}]: {}", ErrorType::OperationError("put"), ERROR_MESSAGE_PUT_AFTER_SHUTDOWN),
        }
    }
}

impl Error for Errors {}
