use clap::Parser;
use hex_agent::game::common::Colour;
use hex_agent::hex::protocol::AgentEngine;
use hex_agent::hex::simple_players::PlayerRand;
use hex_agent::utils;
use std::io;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Colour assigned by the host, R or B
    colour: Colour,
    /// Side length of the board
    board_size: usize,
}

fn main() {
    utils::init_globals();

    let args = Args::parse();
    log::info!(
        "playing {} on a {}x{} board",
        args.colour,
        args.board_size,
        args.board_size
    );

    let player = Box::new(PlayerRand::new());
    let mut engine = AgentEngine::new(args.colour, args.board_size, player);

    let stdin = io::stdin();
    if let Err(error) = engine.run(stdin.lock(), io::stdout()) {
        log::error!("could not read from host: {}", error);
        std::process::exit(1);
    }
}
