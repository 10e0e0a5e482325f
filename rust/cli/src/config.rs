use serde::{Deserialize, Serialize};
use std::fs;

use vingt_engine::rules::{validate_threshold, DEFAULT_THRESHOLD};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub threshold: u8,
    pub bet: i64,
    pub starting_capital: i64,
    pub rounds: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub threshold: ValueSource,
    pub bet: ValueSource,
    pub starting_capital: ValueSource,
    pub rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            threshold: ValueSource::Default,
            bet: ValueSource::Default,
            starting_capital: ValueSource::Default,
            rounds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            threshold: DEFAULT_THRESHOLD,
            bet: 1,
            starting_capital: 100,
            rounds: 1_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("vingt_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.threshold {
            cfg.threshold = v;
            sources.threshold = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = v;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.starting_capital {
            cfg.starting_capital = v;
            sources.starting_capital = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("vingt_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid vingt_SEED".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(threshold) = std::env::var("vingt_THRESHOLD")
        && !threshold.is_empty()
    {
        cfg.threshold = threshold
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid vingt_THRESHOLD".into()))?;
        sources.threshold = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("vingt_BET")
        && !bet.is_empty()
    {
        cfg.bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid vingt_BET".into()))?;
        sources.bet = ValueSource::Env;
    }
    if let Ok(capital) = std::env::var("vingt_CAPITAL")
        && !capital.is_empty()
    {
        cfg.starting_capital = capital
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid vingt_CAPITAL".into()))?;
        sources.starting_capital = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var("vingt_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid vingt_ROUNDS".into()))?;
        sources.rounds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    threshold: Option<u8>,
    #[serde(default)]
    bet: Option<i64>,
    #[serde(default)]
    starting_capital: Option<i64>,
    #[serde(default)]
    rounds: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_threshold(cfg.threshold)
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if cfg.bet < 1 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bet must be >= 1".into(),
        ));
    }
    if cfg.starting_capital < 1 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_capital must be >= 1".into(),
        ));
    }
    if cfg.rounds < 1 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >= 1".into(),
        ));
    }
    Ok(())
}
