use std::collections::HashMap;

use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource, Operation, SevenBitAddress};
use tracing::trace;

//PCA9685 power-on values
const MODE1_RESET: u8 = 0x11;
const PRESCALE_RESET: u8 = 0x1E;

///One register write seen on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterWrite {
    pub address: u8,
    pub register: u8,
    pub value: u8,
}

struct SimChip {
    registers: [u8; 256],
    pointer: u8,
}

impl SimChip {
    fn power_on() -> Self {
        let mut registers = [0u8; 256];
        registers[crate::registers::MODE1 as usize] = MODE1_RESET;
        registers[crate::registers::PRESCALE as usize] = PRESCALE_RESET;
        Self { registers, pointer: 0 }
    }
}

///An I2C bus with simulated PCA9685 chips attached.
///
/// Every write is applied to the addressed chip's register file (with auto-increment) and appended to a log.
/// Addressing a chip that was never attached fails with a NACK, the same as real hardware.
#[derive(Default)]
pub struct SimBus {
    chips: HashMap<u8, SimChip>,
    log: Vec<RegisterWrite>,
    fail_writes: Option<ErrorKind>,
}

impl SimBus {
    pub fn new() -> Self {
        Self::default()
    }

    ///A bus with one chip attached at `address`.
    pub fn with_chip(address: u8) -> Self {
        let mut bus = Self::new();
        bus.attach(address);
        bus
    }

    pub fn attach(&mut self, address: u8) {
        self.chips.insert(address, SimChip::power_on());
    }

    ///Makes every following write fail with `kind`. `None` restores normal operation.
    pub fn fail_writes(&mut self, kind: Option<ErrorKind>) {
        self.fail_writes = kind;
    }

    ///Current contents of a register, or `None` when no chip is attached at `address`.
    pub fn register(&self, address: u8, register: u8) -> Option<u8> {
        self.chips
            .get(&address)
            .map(|chip| chip.registers[register as usize])
    }

    pub fn writes(&self) -> &[RegisterWrite] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), ErrorKind> {
        if let Some(kind) = self.fail_writes {
            return Err(kind);
        }
        let chip = self
            .chips
            .get_mut(&address)
            .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;

        if let Some((register, values)) = bytes.split_first() {
            chip.pointer = *register;
            for value in values {
                trace!("sim 0x{:02X}: [0x{:02X}] <- 0x{:02X}", address, chip.pointer, value);
                chip.registers[chip.pointer as usize] = *value;
                self.log.push(RegisterWrite {
                    address,
                    register: chip.pointer,
                    value: *value,
                });
                chip.pointer = chip.pointer.wrapping_add(1);
            }
        }
        Ok(())
    }

    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), ErrorKind> {
        let chip = self
            .chips
            .get_mut(&address)
            .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;
        for byte in buffer.iter_mut() {
            *byte = chip.registers[chip.pointer as usize];
            chip.pointer = chip.pointer.wrapping_add(1);
        }
        Ok(())
    }
}

impl i2c::ErrorType for SimBus {
    type Error = ErrorKind;
}

impl i2c::I2c<SevenBitAddress> for SimBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.write_bytes(address, bytes)?,
                Operation::Read(buffer) => self.read_bytes(address, buffer)?,
            }
        }
        Ok(())
    }
}
