use serde::Deserialize;

use crate::{
    channel::BoardAddress,
    duty::{DEFAULT_SERVO_MULTIPLIER, DEFAULT_SERVO_ZERO_OFFSET},
};

fn default_i2c_bus() -> u8 {
    1
}

fn default_servo_multiplier() -> i32 {
    DEFAULT_SERVO_MULTIPLIER
}

fn default_servo_zero_offset() -> i32 {
    DEFAULT_SERVO_ZERO_OFFSET
}

//corresponds to one board on one bus
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BoardConfig {
    #[serde(default)]
    pub address: BoardAddress,
    #[serde(default = "default_i2c_bus")]
    pub i2c_bus: u8,
    //trims are clamped when applied, out of band values are not an error
    #[serde(default = "default_servo_multiplier")]
    pub servo_multiplier: i32,
    #[serde(default = "default_servo_zero_offset")]
    pub servo_zero_offset: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            address: BoardAddress::default(),
            i2c_bus: default_i2c_bus(),
            servo_multiplier: default_servo_multiplier(),
            servo_zero_offset: default_servo_zero_offset(),
        }
    }
}
