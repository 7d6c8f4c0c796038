//!Access to the Raspberry Pi I2C buses through rppal.
//!
//! The buses returned here implement `embedded_hal::i2c::I2c` and can be handed to a `Pca9685BoardBuilder` from `botboard_devices` as its bus provider.

//internal error type for rpi i2c
pub mod error;

pub use rppal::i2c::I2c;

use botboard_devices::BuildError;
use error::RpiError;
use tracing::debug;

//get i2c bus by id
pub fn get_bus(bus: u8) -> Result<I2c, RpiError> {
    debug!("opening i2c bus {}", bus);
    Ok(I2c::with_bus(bus)?)
}

///Bus provider in the shape `Pca9685BoardBuilder` expects.
pub fn i2c_bus_provider(bus: u8) -> Result<I2c, BuildError> {
    get_bus(bus).map_err(BuildError::from)
}
