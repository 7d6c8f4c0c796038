//!Drivers for the PCA9685 based robotics board: 8 servo outputs and 4 bidirectional DC motor outputs, driven over I2C at 50Hz.
//!
//! Everything talks to the chip through `embedded_hal::i2c::I2c`, so any bus that implements it (the `botboard_rpi` crate, or the `sim::SimBus` in this crate) can be used.

///Fixed register map of the PCA9685 as the board uses it.
pub mod registers;

///Servo, motor and board address identifiers.
pub mod channel;

///Pure duty cycle computations for servo angles and motor speeds.
pub mod duty;

///The register write primitive the driver composes.
pub mod bus;

///In-memory I2C bus that records register writes. Used for tests and dry runs.
pub mod sim;

///Board configuration.
pub mod config;

///Error types for the driver and for building it from configuration.
pub mod error;

///The board driver itself.
pub mod driver;

pub use channel::{BoardAddress, Motor, MotorDirection, Servo};
pub use config::BoardConfig;
pub use driver::{Pca9685Board, Pca9685BoardBuilder};
pub use duty::{DutyCycle, ServoTrim};
pub use error::{BoardError, BuildError};
