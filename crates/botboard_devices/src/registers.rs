pub const MODE1: u8 = 0x00;
pub const PRESCALE: u8 = 0xFE;

pub const ALL_LED_ON_L: u8 = 0xFA;
pub const ALL_LED_ON_H: u8 = 0xFB;
pub const ALL_LED_OFF_L: u8 = 0xFC;
pub const ALL_LED_OFF_H: u8 = 0xFD;

//25MHz internal oscillator, approximately 50Hz pulse repetition
pub const PRESCALE_50HZ: u8 = 0x85;
//sleep bit clear, respond to the all-call address
pub const MODE1_AWAKE: u8 = 0x01;

//first servo output is LED0_OFF_L
pub const SERVO_REGISTER_BASE: u8 = 0x08;
pub const SERVO_REGISTER_STEP: u8 = 4;

//each motor uses two outputs, forward then reverse
pub const MOTOR_REGISTER_BASE: u8 = 0x28;
pub const MOTOR_REGISTER_STEP: u8 = 8;
pub const MOTOR_REVERSE_OFFSET: u8 = 4;

///Largest value the 12 bit off-time registers can hold.
pub const MAX_DUTY: u16 = 4095;

///Registers zeroed during initialization, in write order.
pub const ALL_LED_REGISTERS: [u8; 4] = [ALL_LED_ON_L, ALL_LED_ON_H, ALL_LED_OFF_L, ALL_LED_OFF_H];
