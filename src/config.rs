use std::{str::FromStr, time::Duration};

use crate::{view::Mode, ConfigError, Population};

pub const USAGE: &str = "\
usage: tumorca [options]
    --size N          side of the square grid (default 20)
    --iterations N    generations to display (default 50)
    --delay MS        pause between generations (default 300)
    --seed N          seed of the random source (default random)
    --population T,C,W  cumulative tissue, cancer and immune thresholds (default 0.7,0.75,0.8)
    --plain           print generations one after the other
    --until-stable    stop once a generation no longer changes
    --help            show this message";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub size: usize,
    pub iterations: usize,
    pub delay: Duration,
    pub seed: Option<u64>,
    pub population: Population,
    pub mode: Mode,
    pub until_stable: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 20,
            iterations: 50,
            delay: Duration::from_millis(300),
            seed: None,
            population: Population::default(),
            mode: Mode::Terminal,
            until_stable: false,
            help: false,
        }
    }
}

impl Config {
    /// parses the arguments following the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--size" => config.size = parse(&flag, args.next())?,
                "--iterations" => config.iterations = parse(&flag, args.next())?,
                "--delay" => config.delay = Duration::from_millis(parse(&flag, args.next())?),
                "--seed" => config.seed = Some(parse(&flag, args.next())?),
                "--population" => config.population = parse_population(&flag, args.next())?,
                "--plain" => config.mode = Mode::Plain,
                "--until-stable" => config.until_stable = true,
                "--help" | "-h" => config.help = true,
                _ => return Err(ConfigError::UnknownArgument(flag)),
            }
        }
        if config.size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        Ok(config)
    }
}

fn parse<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

fn parse_population(flag: &str, value: Option<String>) -> Result<Population, ConfigError> {
    let value: String = parse(flag, value)?;
    let invalid = || ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.clone(),
    };
    let thresholds = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    match thresholds[..] {
        [tissue, cancer, immune] => Population::new(tissue, cancer, immune),
        _ => Err(invalid()),
    }
}
