use tracing::{debug, info, warn};

use crate::{
    bus::RegisterBus,
    channel::{BoardAddress, Motor, MotorDirection, Servo},
    config::BoardConfig,
    duty::{motor_duty, ServoTrim, MAX_MOTOR_SPEED},
    error::{BoardError, BuildError},
    registers::{ALL_LED_REGISTERS, MODE1, MODE1_AWAKE, PRESCALE, PRESCALE_50HZ},
};

const MAX_SERVO_DEGREES: i32 = 180;

///Driver for one robotics board.
///
/// Holds the bus, the board address, the servo trim and whether the chip has been set up yet.
/// Every write goes straight to the chip; there is no buffering or ramping.
///
/// The chip is set up (50Hz, all outputs off, out of sleep) by `initialize`, either called directly or on the first servo or motor command.
pub struct Pca9685Board<B: RegisterBus> {
    bus: B,
    address: BoardAddress,
    trim: ServoTrim,
    initialized: bool,
}

impl<B: RegisterBus> Pca9685Board<B> {
    pub fn new(bus: B, address: BoardAddress) -> Self {
        Self {
            bus,
            address,
            trim: ServoTrim::default(),
            initialized: false,
        }
    }

    pub fn from_config(bus: B, config: &BoardConfig) -> Self {
        let mut board = Self::new(bus, config.address);
        board.trim_servo_multiplier(config.servo_multiplier);
        board.trim_servo_zero_offset(config.servo_zero_offset);
        board
    }

    pub fn address(&self) -> BoardAddress {
        self.address
    }

    pub fn trim(&self) -> ServoTrim {
        self.trim
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    ///Gives the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    ///Moves the driver to another board address. Only possible before the chip has been initialized.
    pub fn set_address(&mut self, address: BoardAddress) -> Result<(), BoardError<B::Error>> {
        if self.initialized {
            return Err(BoardError::AlreadyInitialized);
        }
        self.address = address;
        Ok(())
    }

    ///Sets the servo pulse multiplier, clamped into 113-226.
    pub fn trim_servo_multiplier(&mut self, value: i32) {
        self.trim.set_multiplier(value);
        if self.trim.multiplier() != value {
            debug!("servo multiplier {} clamped to {}", value, self.trim.multiplier());
        }
    }

    ///Sets the servo zero offset, clamped into 0x66-0xCC.
    pub fn trim_servo_zero_offset(&mut self, value: i32) {
        self.trim.set_zero_offset(value);
        if self.trim.zero_offset() != value {
            debug!("servo zero offset {} clamped to {}", value, self.trim.zero_offset());
        }
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), BoardError<B::Error>> {
        self.bus
            .write_register(self.address.i2c_address(), register, value)
            .map_err(BoardError::Bus)
    }

    ///Sets the chip to 50Hz, turns every output off and takes the chip out of sleep. Does nothing once it has succeeded.
    pub fn initialize(&mut self) -> Result<(), BoardError<B::Error>> {
        if self.initialized {
            return Ok(());
        }

        //prescale can only be written while asleep, which is the power-on state
        self.write(PRESCALE, PRESCALE_50HZ)?;
        for register in ALL_LED_REGISTERS {
            self.write(register, 0x00)?;
        }
        self.write(MODE1, MODE1_AWAKE)?;

        self.initialized = true;
        info!("initialized PCA9685 board at {}", self.address);
        Ok(())
    }

    pub fn set_servo_angle(
        &mut self,
        servo: Servo,
        degrees: i32,
    ) -> Result<(), BoardError<B::Error>> {
        self.initialize()?;

        if !(0..=MAX_SERVO_DEGREES).contains(&degrees) {
            warn!(
                "servo {} angle {} is outside 0-{} degrees, the pulse width will be truncated",
                servo, degrees, MAX_SERVO_DEGREES
            );
        }
        let duty = self.trim.duty_for_angle(degrees);
        debug!("servo {} -> {} degrees (duty {})", servo, degrees, duty.value());

        let register = servo.register();
        self.write(register, duty.low_byte())?;
        self.write(register + 1, duty.servo_high())
    }

    ///Runs a motor in one direction at `speed` percent, clamped into 0-100.
    /// The opposite direction's output is always forced off.
    pub fn set_motor_speed(
        &mut self,
        motor: Motor,
        direction: MotorDirection,
        speed: i32,
    ) -> Result<(), BoardError<B::Error>> {
        self.initialize()?;

        let duty = motor_duty(speed);
        debug!(
            "motor {} -> {} at {}% (duty {})",
            motor,
            direction,
            speed.clamp(0, MAX_MOTOR_SPEED),
            duty.value()
        );

        let (active, inactive) = motor.registers_for(direction);
        self.write(active, duty.low_byte())?;
        self.write(active + 1, duty.high_byte())?;
        self.write(inactive, 0x00)?;
        self.write(inactive + 1, 0x00)
    }

    pub fn stop_motor(&mut self, motor: Motor) -> Result<(), BoardError<B::Error>> {
        debug!("stopping motor {}", motor);
        let forward = motor.forward_register();
        let reverse = motor.reverse_register();
        self.write(forward, 0x00)?;
        self.write(forward + 1, 0x00)?;
        self.write(reverse, 0x00)?;
        self.write(reverse + 1, 0x00)
    }

    pub fn stop_all_motors(&mut self) -> Result<(), BoardError<B::Error>> {
        for motor in Motor::ALL {
            self.stop_motor(motor)?;
        }
        Ok(())
    }

    pub fn stop_all_servos(&mut self) -> Result<(), BoardError<B::Error>> {
        debug!("stopping all servos");
        for servo in Servo::ALL {
            let register = servo.register();
            self.write(register, 0x00)?;
            self.write(register + 1, 0x00)?;
        }
        Ok(())
    }
}

///Builds an initialized board from configuration, getting the bus from a provider.
pub struct Pca9685BoardBuilder<B, F>
where
    B: RegisterBus,
    F: Fn(u8) -> Result<B, BuildError>,
{
    i2c_bus_provider: F,
}

impl<B, F> Pca9685BoardBuilder<B, F>
where
    B: RegisterBus,
    F: Fn(u8) -> Result<B, BuildError>,
{
    pub fn new(i2c_bus_provider: F) -> Self {
        Pca9685BoardBuilder { i2c_bus_provider }
    }

    pub fn try_build(&self, cfg: &BoardConfig) -> Result<Pca9685Board<B>, BuildError> {
        let bus = (self.i2c_bus_provider)(cfg.i2c_bus)?;
        let mut board = Pca9685Board::from_config(bus, cfg);
        board.initialize()?;
        Ok(board)
    }
}
