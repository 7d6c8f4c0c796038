use botboard_devices::BoardConfig;
use serde::Deserialize;

use crate::steps::Step;

#[derive(Deserialize, Debug, Default)]
pub struct Metadata {
    pub name: Option<String>,
    pub description: Option<String>,
}

///Top level configuration: which board to drive and what to do with it.
#[derive(Deserialize, Debug, Default)]
pub struct BotboardConfig {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub board: BoardConfig,
    //drive an in-memory board instead of the i2c bus
    #[serde(default)]
    pub simulate: bool,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use botboard_devices::{
        sim::SimBus, BoardAddress, Motor, MotorDirection, Pca9685Board, Servo, ServoTrim,
    };
    use config_rs::{Config, File, FileFormat};

    fn parse(yaml: &str) -> BotboardConfig {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .and_then(|config| config.try_deserialize::<BotboardConfig>())
            .unwrap()
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
metadata:
  name: sweep
  description: sweep one servo and run one motor
board:
  address: Board3
  i2c_bus: 0
  servo_multiplier: 200
  servo_zero_offset: 110
simulate: true
steps:
  - Servo:
      servo: S1
      degrees: 90
  - Motor:
      motor: M2
      direction: CCW
      speed: 50
  - Wait:
      ms: 250
  - StopMotor:
      motor: M2
  - StopAllServos
"#,
        );

        assert_eq!(config.metadata.name.as_deref(), Some("sweep"));
        assert_eq!(config.board.address, BoardAddress::Board3);
        assert_eq!(config.board.i2c_bus, 0);
        assert_eq!(config.board.servo_multiplier, 200);
        assert_eq!(config.board.servo_zero_offset, 110);
        assert!(config.simulate);
        assert_eq!(
            config.steps,
            vec![
                Step::Servo {
                    servo: Servo::S1,
                    degrees: 90,
                },
                Step::Motor {
                    motor: Motor::M2,
                    direction: MotorDirection::CCW,
                    speed: 50,
                },
                Step::Wait { ms: 250 },
                Step::StopMotor { motor: Motor::M2 },
                Step::StopAllServos,
            ]
        );
    }

    #[test]
    fn test_out_of_range_values_load() {
        let config = parse(
            r#"
board:
  servo_multiplier: 70000
  servo_zero_offset: -3
steps:
  - Motor:
      motor: M1
      direction: CW
      speed: 300
  - Motor:
      motor: M3
      direction: CCW
      speed: -5
  - Servo:
      servo: S2
      degrees: -10
"#,
        );
        assert_eq!(config.board.servo_multiplier, 70000);
        assert_eq!(config.board.servo_zero_offset, -3);
        assert_eq!(
            config.steps[0],
            Step::Motor {
                motor: Motor::M1,
                direction: MotorDirection::CW,
                speed: 300,
            }
        );

        //the values are clamped once they reach the board
        let board = Pca9685Board::from_config(SimBus::with_chip(0x6C), &config.board);
        assert_eq!(board.trim(), ServoTrim::new(226, 0x66));
    }

    #[test]
    fn test_defaults() {
        let config = parse("simulate: false\n");
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.board.address, BoardAddress::Board1);
        assert_eq!(config.board.i2c_bus, 1);
        assert!(config.steps.is_empty());
        assert!(config.metadata.name.is_none());
    }
}
