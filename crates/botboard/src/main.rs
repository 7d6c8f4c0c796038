pub mod config;
pub mod steps;

use botboard_devices::{sim::SimBus, BoardConfig, BuildError, Pca9685Board, Pca9685BoardBuilder};
use config::BotboardConfig;
use config_rs::{Config, File};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

//a simulated bus with one board answering at the configured address
fn sim_board(cfg: &BoardConfig) -> Result<Pca9685Board<SimBus>, BuildError> {
    let address = cfg.address.i2c_address();
    Pca9685BoardBuilder::new(move |_bus: u8| Ok(SimBus::with_chip(address))).try_build(cfg)
}

async fn run(config: BotboardConfig) -> Result<(), BuildError> {
    if config.simulate {
        info!("simulating {}", config.board.address);
        let mut board = sim_board(&config.board)?;
        return steps::drive(&mut board, &config.steps).await;
    }

    #[cfg(feature = "rpi")]
    {
        let mut board = Pca9685BoardBuilder::new(botboard_rpi::i2c_bus_provider)
            .try_build(&config.board)?;
        steps::drive(&mut board, &config.steps).await
    }

    #[cfg(not(feature = "rpi"))]
    {
        warn!("built without the rpi feature, simulating {}", config.board.address);
        let mut board = sim_board(&config.board)?;
        steps::drive(&mut board, &config.steps).await
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botboard=debug,botboard_devices=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        warn!("only one parameter, the config file, is expected.");
        warn!("got {}", args.join(","));
    } else if let Some(cfg_name) = args.get(1).map(|o| o.as_str()) {
        let config_res = Config::builder()
            .add_source(File::with_name(cfg_name))
            .build()
            .and_then(|config| config.try_deserialize::<BotboardConfig>());

        match config_res {
            Ok(config) => {
                info!("botboard starting up!");
                if let Some(ref name) = config.metadata.name {
                    info!("name: {name}")
                }
                if let Some(ref descrip) = config.metadata.description {
                    info!("description: {descrip}")
                }
                match run(config).await {
                    Ok(_) => info!("botboard shut down!"),
                    Err(err) => error!("botboard exited with an error: {:?}", err),
                }
            }
            Err(err) => {
                error!("Error starting botboard. Failed to parse config: {:?}", err);
            }
        }
    }
}
