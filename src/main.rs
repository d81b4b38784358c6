use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use adv_engine::GameState;
use adv_engine::engine::{Output, OutputBlock};
use adv_engine::world;
use log::{info, warn};

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Event(ev) => println!("{}", ev),
            OutputBlock::Error(err) => eprintln!("{}", err),
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("adv_engine");
        eprintln!("Usage: {} [world_file]", program);
        std::process::exit(1);
    }

    let world_path = PathBuf::from(&args[1]);
    let world = match world::load_world_from_file(&world_path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for finding in world::validate_world(&world) {
        warn!("{}", finding.message);
    }

    let mut game = GameState::new(world);

    let (out, outcome) = game.initialize();
    flush_output(out);
    if outcome.is_over() {
        return Ok(());
    }

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        let line = input.trim_end_matches(['\n', '\r']);
        if line == "exit" {
            break;
        }

        let (out, outcome) = game.step(line);
        flush_output(out);

        if outcome.is_over() {
            info!("session ended: {:?}", outcome);
            break;
        }
    }

    Ok(())
}
