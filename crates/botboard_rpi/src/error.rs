use std::fmt::{Debug, Formatter};

use botboard_devices::BuildError;

pub struct RpiError {
    pub message: String,
}

impl Debug for RpiError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        fmt.write_str(&self.message)
    }
}

impl From<&str> for RpiError {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<rppal::i2c::Error> for RpiError {
    fn from(err: rppal::i2c::Error) -> Self {
        Self {
            message: format!("RpiI2cError - Cause: {}", err),
        }
    }
}

impl From<RpiError> for BuildError {
    fn from(err: RpiError) -> Self {
        BuildError::from_string(err.message)
    }
}
