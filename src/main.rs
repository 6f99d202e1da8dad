use std::{env::args, io::stdout, process::exit, thread};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub use utils::{moore_offsets, Pos};
mod utils;

pub use world::{Cell, Census, Grid, Population, World};
pub mod world;

pub use rules::transition;
mod rules;

pub use sim::{advance, Sim, Step};
mod sim;

pub use view::View;
mod view;

pub use config::{Config, USAGE};
mod config;

pub use error::{ConfigError, Error};
mod error;

pub fn main() {
    let config = Config::from_args(args().skip(1)).unwrap_or_else(|error| {
        eprintln!("[error] {error}");
        eprintln!("{USAGE}");
        exit(1);
    });

    if config.help {
        println!("{USAGE}");
        return;
    }

    if let Err(error) = run(config) {
        eprintln!("[error] {error}");
        exit(1);
    }
}

fn run(config: Config) -> Result<(), Error> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    eprintln!("[info] seed {seed}, {0}x{0} grid", config.size);

    let mut rng = Pcg64::seed_from_u64(seed);
    let world = Grid::seeded(config.size, &config.population, &mut rng);
    let mut simulation = Sim::new(world, rng);
    let mut screen = View::new(config.mode, stdout().lock());

    for _ in 0..config.iterations {
        screen.show(simulation.world(), simulation.generation())?;
        if simulation.step() == Step::Stable && config.until_stable {
            eprintln!("[info] stable at generation {}", simulation.generation());
            break;
        }
        thread::sleep(config.delay);
    }

    let census = simulation.census();
    eprintln!("[info] {}", view::status(simulation.generation(), census));
    Ok(())
}
