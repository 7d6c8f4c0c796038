use std::fmt::{self, Debug, Display, Formatter};

///Error from a board operation. Inputs are clamped rather than rejected, so the only failures are on the bus
/// or an attempt to move an already initialized board to a different address.
pub enum BoardError<E> {
    Bus(E),
    AlreadyInitialized,
}

impl<E: Debug> Debug for BoardError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => f.write_fmt(format_args!("BoardError: bus write failed: {:?}", err)),
            Self::AlreadyInitialized => {
                f.write_str("BoardError: board is already initialized, the address can't change")
            }
        }
    }
}

impl<E: Debug> Display for BoardError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl<E: Debug> std::error::Error for BoardError<E> {}

impl<E: PartialEq> PartialEq for BoardError<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bus(a), Self::Bus(b)) => a == b,
            (Self::AlreadyInitialized, Self::AlreadyInitialized) => true,
            _ => false,
        }
    }
}

///Error building a board from configuration.
pub enum BuildError {
    Message(String),
    Messages(Vec<String>),
}

impl BuildError {
    pub fn from_string(msg: String) -> Self {
        BuildError::Message(msg)
    }
    pub fn from_errs(errs: Vec<BuildError>) -> Self {
        let mut messages = Vec::with_capacity(errs.len());
        for err in errs {
            match err {
                Self::Message(msg) => messages.push(msg),
                Self::Messages(mut msgs) => messages.append(&mut msgs),
            }
        }
        Self::Messages(messages)
    }
    pub fn message(msg: &str) -> Self {
        BuildError::Message(msg.to_string())
    }
}

impl Debug for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_fmt(format_args!("BuildError: {}", message)),
            Self::Messages(messages) => f.write_fmt(format_args!(
                "BuildError (multiple): \n{}",
                messages.join("\n")
            )),
        }
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BuildError {}

impl<E: Debug> From<BoardError<E>> for BuildError {
    fn from(err: BoardError<E>) -> Self {
        BuildError::from_string(format!("Could not configure PCA9685 board: {:?}", err))
    }
}
