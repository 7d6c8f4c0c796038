use embedded_hal::i2c;
use tracing::trace;

///The single primitive the board driver needs: write one byte into one register of the chip at `address`.
///
/// On the wire this is a two byte write, register offset followed by value.
pub trait RegisterBus {
    type Error: std::fmt::Debug;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<I2C> RegisterBus for I2C
where
    I2C: i2c::I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        trace!("i2c 0x{:02X}: [0x{:02X}] <- 0x{:02X}", address, register, value);
        self.write(address, &[register, value])
    }
}
