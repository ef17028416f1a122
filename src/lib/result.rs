use std::{error, fmt};

/// An error.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    InvalidInput(Input),
    InvalidParameter {
        name: &'static str,
        value: Option<i64>,
    },
    UnknownPolicy(String),
    Other(String),
}

/// A reason for rejecting a set of jobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Empty,
    Burst { id: usize, value: i64 },
    Arrival { id: usize, value: i64 },
    Overflow,
}

/// A result.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    #[inline]
    pub fn new<T: ToString>(message: T) -> Error {
        Error::Other(message.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidInput(ref input) => write!(formatter, "invalid input: {}", input),
            Error::InvalidParameter { name, value: Some(value) } => {
                write!(formatter, "invalid parameter: the {} should be positive, got {}", name, value)
            },
            Error::InvalidParameter { name, value: None } => {
                write!(formatter, "invalid parameter: the {} is required", name)
            },
            Error::UnknownPolicy(ref name) => write!(formatter, "the policy {:?} is unknown", name),
            Error::Other(ref message) => write!(formatter, "{}", message),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Input::Empty => write!(formatter, "there are no jobs"),
            Input::Burst { id, value } => {
                write!(formatter, "job {} has a non-positive burst time ({})", id, value)
            },
            Input::Arrival { id, value } => {
                write!(formatter, "job {} has a negative arrival time ({})", id, value)
            },
            Input::Overflow => write!(formatter, "the total work exceeds the range of time"),
        }
    }
}

impl error::Error for Error {
}

#[cfg(test)]
mod tests {
    use super::{Error, Input};

    #[test]
    fn display() {
        assert_eq!(Error::InvalidInput(Input::Empty).to_string(), "invalid input: there are no jobs");
        assert_eq!(Error::InvalidInput(Input::Burst { id: 2, value: 0 }).to_string(),
                   "invalid input: job 2 has a non-positive burst time (0)");
        assert_eq!(Error::InvalidParameter { name: "quantum", value: Some(-1) }.to_string(),
                   "invalid parameter: the quantum should be positive, got -1");
        assert_eq!(Error::InvalidParameter { name: "quantum", value: None }.to_string(),
                   "invalid parameter: the quantum is required");
        assert_eq!(Error::UnknownPolicy("lottery".to_string()).to_string(),
                   "the policy \"lottery\" is unknown");
        assert_eq!(Error::new("failed").to_string(), "failed");
    }
}
