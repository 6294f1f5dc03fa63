use std::fmt::{Debug, Display, Formatter};

pub struct ProbeError {
    details: String,
}

impl ProbeError {
    pub fn new(msg: &str) -> ProbeError {
        return ProbeError { details: msg.to_string() };
    }
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Debug for ProbeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl std::error::Error for ProbeError {}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> ProbeError {
        return ProbeError::new(&err.to_string());
    }
}
