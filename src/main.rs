use clap::Parser;
use std::io;
use std::process::ExitCode;

use hive_beacons::agent::Agent;
use hive_beacons::config::{self, Config};
use hive_beacons::error::{Error, Result};
use hive_beacons::interface::{self, Setup};

fn main() -> ExitCode {
    let config = Config::parse();
    config::init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Setup { mut graph, my_bases, opponent_bases } = interface::read_initial(&mut input)?;
    tracing::info!("Strategy: {}, bases: me={:?}, enemy={:?}", config.strategy, my_bases, opponent_bases);
    graph.dump();

    let mut agent = Agent::new(config.strategy);

    // game loop
    loop {
        match interface::read_turn(&mut input, &mut graph) {
            Ok(()) => (),
            Err(Error::UnexpectedEof) => {
                tracing::info!("input closed, game over");
                return Ok(());
            },
            Err(err) => return Err(err),
        }

        let actions = agent.act(&graph, &my_bases);
        println!("{}", interface::format_actions(&actions));
    }
}
