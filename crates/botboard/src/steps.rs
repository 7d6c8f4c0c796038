use std::time::Duration;

use botboard_devices::{
    bus::RegisterBus, BoardError, BuildError, Motor, MotorDirection, Pca9685Board, Servo,
};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

///One command in a run. Everything except `Wait` is a single immediate write to the board.
///
/// Angles, speeds and trims are taken as signed values and clamped by the board, so a config with
/// `speed: -5` or `speed: 300` still loads.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum Step {
    Servo {
        servo: Servo,
        degrees: i32,
    },
    Motor {
        motor: Motor,
        direction: MotorDirection,
        speed: i32,
    },
    StopMotor {
        motor: Motor,
    },
    StopAllMotors,
    StopAllServos,
    TrimMultiplier {
        value: i32,
    },
    TrimZeroOffset {
        value: i32,
    },
    Wait {
        ms: u64,
    },
}

async fn apply_step<B: RegisterBus>(
    board: &mut Pca9685Board<B>,
    step: &Step,
) -> Result<(), BoardError<B::Error>> {
    match *step {
        Step::Servo { servo, degrees } => board.set_servo_angle(servo, degrees),
        Step::Motor {
            motor,
            direction,
            speed,
        } => board.set_motor_speed(motor, direction, speed),
        Step::StopMotor { motor } => board.stop_motor(motor),
        Step::StopAllMotors => board.stop_all_motors(),
        Step::StopAllServos => board.stop_all_servos(),
        Step::TrimMultiplier { value } => {
            board.trim_servo_multiplier(value);
            Ok(())
        }
        Step::TrimZeroOffset { value } => {
            board.trim_servo_zero_offset(value);
            Ok(())
        }
        Step::Wait { ms } => {
            sleep(Duration::from_millis(ms)).await;
            Ok(())
        }
    }
}

///Runs the steps in order, stopping at the first bus error.
pub async fn run_steps<B: RegisterBus>(
    board: &mut Pca9685Board<B>,
    steps: &[Step],
) -> Result<(), BoardError<B::Error>> {
    for (i, step) in steps.iter().enumerate() {
        debug!("step {}: {:?}", i, step);
        apply_step(board, step).await?;
    }
    Ok(())
}

///Runs the steps until they finish or Ctrl-C arrives, then turns every output off.
pub async fn drive<B: RegisterBus>(
    board: &mut Pca9685Board<B>,
    steps: &[Step],
) -> Result<(), BuildError> {
    info!("running {} steps on {}", steps.len(), board.address());

    let outcome = tokio::select! {
        res = run_steps(board, steps) => res.map_err(BuildError::from),
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, stopping outputs");
            Ok(())
        }
    };

    let stopped = shutdown(board);
    if let Err(ref err) = stopped {
        error!("failed to stop outputs on shutdown! {:?}", err);
    }

    match (outcome, stopped) {
        (Err(run_err), Err(stop_err)) => Err(BuildError::from_errs(vec![run_err, stop_err])),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
        (Ok(_), Ok(_)) => Ok(()),
    }
}

fn shutdown<B: RegisterBus>(board: &mut Pca9685Board<B>) -> Result<(), BuildError> {
    board.stop_all_motors()?;
    board.stop_all_servos()?;
    debug!("all outputs off");
    Ok(())
}
