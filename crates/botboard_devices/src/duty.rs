use crate::registers::MAX_DUTY;

pub const DEFAULT_SERVO_MULTIPLIER: i32 = 226;
pub const DEFAULT_SERVO_ZERO_OFFSET: i32 = 0x66;

pub const SERVO_MULTIPLIER_RANGE: [i32; 2] = [113, 226];
pub const SERVO_ZERO_OFFSET_RANGE: [i32; 2] = [0x66, 0xCC];

pub const MAX_MOTOR_SPEED: i32 = 100;
//0-100 onto 0-4000. the top 95 counts of the 12 bit range are never used.
const MOTOR_DUTY_PER_PERCENT: i64 = 40;

///A computed off-time for one output, before it is split across the low and high registers.
///
/// Signed, since a servo angle below zero computes to less than the zero offset and can go negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DutyCycle(i64);

impl DutyCycle {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    ///Value for the low off-time register. Anything above 8 bits is dropped, negative values wrap.
    pub fn low_byte(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    ///Value for a servo's high off-time register: a single bit, set whenever the duty does not fit in the low byte.
    pub fn servo_high(&self) -> u8 {
        if self.0 > 0xFF {
            0x01
        } else {
            0x00
        }
    }

    ///Value for a motor's high off-time register.
    pub fn high_byte(&self) -> u8 {
        (self.0.clamp(0, MAX_DUTY as i64) >> 8) as u8
    }
}

///Pulse width scaling for servo outputs.
///
/// Servos tested with the board expect 0.5ms - 2.5ms pulses, not the often quoted 1ms - 2ms, which is what the defaults produce.
/// Both values can be trimmed but are held inside a band that keeps the pulses safe for the servo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServoTrim {
    multiplier: i32,
    zero_offset: i32,
}

impl Default for ServoTrim {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_SERVO_MULTIPLIER,
            zero_offset: DEFAULT_SERVO_ZERO_OFFSET,
        }
    }
}

fn clamp_to(value: i32, range: &[i32; 2]) -> i32 {
    value.max(range[0]).min(range[1])
}

impl ServoTrim {
    ///Builds a trim from raw values, clamping both into their bands.
    pub fn new(multiplier: i32, zero_offset: i32) -> Self {
        let mut trim = Self::default();
        trim.set_multiplier(multiplier);
        trim.set_zero_offset(zero_offset);
        trim
    }

    pub fn multiplier(&self) -> i32 {
        self.multiplier
    }

    pub fn zero_offset(&self) -> i32 {
        self.zero_offset
    }

    pub fn set_multiplier(&mut self, value: i32) {
        self.multiplier = clamp_to(value, &SERVO_MULTIPLIER_RANGE);
    }

    pub fn set_zero_offset(&mut self, value: i32) {
        self.zero_offset = clamp_to(value, &SERVO_ZERO_OFFSET_RANGE);
    }

    ///Off-time for a servo angle in degrees, rounded down.
    ///
    /// The angle is not clamped. Callers are expected to stay within 0-180; other angles produce values
    /// that no longer fit the low byte plus high bit the board writes, and are truncated when written.
    pub fn duty_for_angle(&self, degrees: i32) -> DutyCycle {
        let scaled = (degrees as i64 * self.multiplier as i64).div_euclid(100);
        DutyCycle(scaled + self.zero_offset as i64)
    }
}

///Off-time for a motor speed in percent. Speeds are clamped into 0-100.
pub fn motor_duty(speed: i32) -> DutyCycle {
    let speed = speed.clamp(0, MAX_MOTOR_SPEED) as i64;
    DutyCycle(speed * MOTOR_DUTY_PER_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_servo_range() {
        let trim = ServoTrim::default();
        assert_eq!(trim.duty_for_angle(0), DutyCycle::new(0x66));
        assert_eq!(trim.duty_for_angle(90), DutyCycle::new(203 + 0x66));
        assert_eq!(trim.duty_for_angle(180), DutyCycle::new(406 + 0x66));

        let mut last = trim.duty_for_angle(0);
        for degrees in 1..=180 {
            let duty = trim.duty_for_angle(degrees);
            assert!(duty >= last, "duty decreased at {} degrees", degrees);
            assert!(duty.value() >= 0x66 && duty.value() <= 0x1FF);
            last = duty;
        }
    }

    #[test]
    fn test_servo_floor_division() {
        //1 * 226 / 100 = 2.26
        let trim = ServoTrim::default();
        assert_eq!(trim.duty_for_angle(1).value(), 2 + 0x66);
        //3 * 226 / 100 = 6.78
        assert_eq!(trim.duty_for_angle(3).value(), 6 + 0x66);
    }

    #[test]
    fn test_negative_angle_floors() {
        //-10 * 226 / 100 = -22.6, floored to -23
        let duty = ServoTrim::default().duty_for_angle(-10);
        assert_eq!(duty.value(), 0x66 - 23);
        assert_eq!(duty.low_byte(), 79);
        assert_eq!(duty.servo_high(), 0x00);

        //-100 * 226 / 100 = -226, + 102 = -124, which wraps in the low byte
        let duty = ServoTrim::default().duty_for_angle(-100);
        assert_eq!(duty.value(), -124);
        assert_eq!(duty.low_byte(), 132);
        assert_eq!(duty.servo_high(), 0x00);
    }

    #[test]
    fn test_extreme_angles_do_not_overflow() {
        let trim = ServoTrim::default();
        assert_eq!(
            trim.duty_for_angle(i32::MAX).value(),
            (i32::MAX as i64 * 226).div_euclid(100) + 0x66
        );
        assert!(trim.duty_for_angle(i32::MIN).value() < 0);
    }

    #[test]
    fn test_out_of_range_angle_truncates() {
        //255 * 226 / 100 = 576, + 102 = 678 = 0x2A6
        let duty = ServoTrim::default().duty_for_angle(255);
        assert_eq!(duty.value(), 0x2A6);
        assert_eq!(duty.low_byte(), 0xA6);
        assert_eq!(duty.servo_high(), 0x01);
    }

    #[test]
    fn test_trim_clamps() {
        let mut trim = ServoTrim::default();

        trim.set_multiplier(50);
        assert_eq!(trim.multiplier(), 113);
        trim.set_multiplier(500);
        assert_eq!(trim.multiplier(), 226);
        trim.set_multiplier(150);
        assert_eq!(trim.multiplier(), 150);

        trim.set_zero_offset(0);
        assert_eq!(trim.zero_offset(), 0x66);
        trim.set_zero_offset(0x1000);
        assert_eq!(trim.zero_offset(), 0xCC);
        trim.set_zero_offset(0x80);
        assert_eq!(trim.zero_offset(), 0x80);

        assert_eq!(ServoTrim::new(0, i32::MAX), ServoTrim::new(113, 0xCC));
    }

    #[test]
    fn test_trim_clamps_negative_and_huge() {
        let mut trim = ServoTrim::default();
        trim.set_multiplier(-5);
        assert_eq!(trim.multiplier(), 113);
        trim.set_multiplier(70000);
        assert_eq!(trim.multiplier(), 226);

        trim.set_zero_offset(-1);
        assert_eq!(trim.zero_offset(), 0x66);
        trim.set_zero_offset(i32::MAX);
        assert_eq!(trim.zero_offset(), 0xCC);
    }

    #[test]
    fn test_trimmed_servo_duty() {
        let trim = ServoTrim::new(113, 0x80);
        assert_eq!(trim.duty_for_angle(100).value(), 113 + 0x80);
    }

    #[test]
    fn test_servo_split() {
        let duty = DutyCycle::new(0x1FC);
        assert_eq!(duty.low_byte(), 0xFC);
        assert_eq!(duty.servo_high(), 0x01);

        let duty = DutyCycle::new(0xFF);
        assert_eq!(duty.low_byte(), 0xFF);
        assert_eq!(duty.servo_high(), 0x00);
    }

    #[test]
    fn test_motor_duty() {
        assert_eq!(motor_duty(0).value(), 0);
        assert_eq!(motor_duty(50).value(), 2000);
        assert_eq!(motor_duty(100).value(), 4000);
        assert_eq!(motor_duty(255).value(), 4000);
    }

    #[test]
    fn test_motor_duty_clamps_negative_and_huge() {
        assert_eq!(motor_duty(-5).value(), 0);
        assert_eq!(motor_duty(i32::MIN).value(), 0);
        assert_eq!(motor_duty(300).value(), 4000);
        assert_eq!(motor_duty(i32::MAX).value(), 4000);
    }

    #[test]
    fn test_motor_split() {
        //4000 = 0x0FA0
        let duty = motor_duty(100);
        assert_eq!(duty.low_byte(), 0xA0);
        assert_eq!(duty.high_byte(), 0x0F);

        //240 fits in the low byte
        let duty = motor_duty(6);
        assert_eq!(duty.low_byte(), 240);
        assert_eq!(duty.high_byte(), 0);
    }

    #[test]
    fn test_motor_duty_never_exceeds_register_width() {
        for speed in -50..=300 {
            let duty = motor_duty(speed);
            assert!(duty.value() >= 0 && duty.value() <= MAX_DUTY as i64);
            let written = ((duty.high_byte() as i64) << 8) | duty.low_byte() as i64;
            assert_eq!(written, duty.value());
        }
    }
}
