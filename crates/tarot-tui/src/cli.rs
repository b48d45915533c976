//! Command-line interface
//!
//! Without a subcommand the terminal UI starts. `draw` prints a single
//! reading as plain text and `spreads` lists the catalog, so both work in
//! pipes and scripts.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tarot_core::{spread, Deck, DrawnCard, ReadingState, SpreadDefinition};

use crate::app::TuiConfig;

#[derive(Parser, Debug)]
#[command(name = "tarot-tui")]
#[command(about = "Draw and read tarot spreads in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Card dataset JSON file (defaults to the embedded deck)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Directory card images are resolved against
    #[arg(long, global = true)]
    pub images_dir: Option<PathBuf>,

    /// Seed for reproducible readings
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Use the high-contrast palette
    #[arg(long)]
    pub high_contrast: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Draw one reading and print it
    Draw {
        /// Spread index or name (see `spreads`)
        #[arg(short, long)]
        spread: Option<String>,

        /// Number of cards for spreads without fixed positions
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Allow reversed cards
        #[arg(short, long)]
        reversed: bool,
    },

    /// List the available spreads
    Spreads,

    /// Show the effective configuration
    Config {
        /// Write it to the configuration file
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// Configuration file in effect
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(TuiConfig::config_file_path)
    }

    /// Load the configuration file and apply command-line overrides
    pub fn load_config(&self) -> TuiConfig {
        let mut config = match self.config_path() {
            Some(path) => TuiConfig::load_from(&path),
            None => TuiConfig::default(),
        };
        self.apply_overrides(&mut config);
        config
    }

    /// Flags take precedence over the configuration file
    pub fn apply_overrides(&self, config: &mut TuiConfig) {
        if let Some(dataset) = &self.dataset {
            config.dataset_path = Some(dataset.clone());
        }
        if let Some(images_dir) = &self.images_dir {
            config.images_dir = images_dir.clone();
        }
        if self.high_contrast {
            config.high_contrast = true;
        }
    }
}

/// Load the configured dataset, or the embedded one
pub fn load_deck(config: &TuiConfig) -> Result<Deck> {
    let deck = match &config.dataset_path {
        Some(path) => Deck::load(path)
            .with_context(|| format!("Failed to load card dataset {}", path.display()))?,
        None => Deck::embedded().context("Embedded card dataset is invalid")?,
    };
    tracing::info!("Loaded {} cards", deck.len());
    Ok(deck)
}

/// Resolve a spread given by index or case-insensitive name
pub fn resolve_spread(arg: &str) -> Result<usize> {
    if let Ok(index) = arg.trim().parse::<usize>() {
        if spread::get(index).is_some() {
            return Ok(index);
        }
        bail!(
            "Spread index {} out of range (0-{})",
            index,
            spread::count() - 1
        );
    }
    match spread::find_by_name(arg) {
        Some(index) => Ok(index),
        None => bail!("Unknown spread '{}'; run `tarot-tui spreads` for the list", arg),
    }
}

/// Draw one reading for the `draw` subcommand
pub fn draw_reading(
    deck: &Deck,
    config: &TuiConfig,
    spread_arg: Option<&str>,
    count: Option<usize>,
    reversed: bool,
    seed: Option<u64>,
) -> Result<ReadingState> {
    let spread_index = match spread_arg {
        Some(arg) => resolve_spread(arg)?,
        None => config.default_spread,
    };
    if count == Some(0) {
        bail!("At least one card must be drawn");
    }

    let mut reading = ReadingState::with_defaults(
        spread_index,
        count.unwrap_or(config.default_count),
        reversed || config.allow_reversed,
    );

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    reading.draw(deck.cards(), &mut rng)?;
    Ok(reading)
}

/// Print a reading as plain text
pub fn print_reading(
    out: &mut impl Write,
    spread: &SpreadDefinition,
    cards: &[DrawnCard],
    images_dir: &Path,
) -> std::io::Result<()> {
    writeln!(out, "{}", spread.label())?;
    writeln!(out)?;

    for (i, card) in cards.iter().enumerate() {
        match &card.position {
            Some(position) => writeln!(out, "{:>2}. {}: {}", i + 1, position, card.title())?,
            None => writeln!(out, "{:>2}. {}", i + 1, card.title())?,
        }
        if !card.card.keywords.is_empty() {
            writeln!(out, "    {}", card.card.keywords.join(", "))?;
        }
        let meanings = if card.reversed {
            card.card.shadow_meanings()
        } else {
            card.card.light_meanings()
        };
        if let Some(meaning) = meanings.first() {
            writeln!(out, "    {}", meaning)?;
        }
        writeln!(
            out,
            "    {}",
            Deck::image_path(&card.card, images_dir).display()
        )?;
    }
    Ok(())
}

/// Print a configuration as JSON
pub fn print_config(out: &mut impl Write, config: &TuiConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Print the spread catalog
pub fn print_spreads(out: &mut impl Write) -> std::io::Result<()> {
    for option in spread::options() {
        let layout = spread::get(option.index).map_or("", |s| s.layout.tag());
        writeln!(out, "{:>2}  {:<36} {}", option.index, option.label, layout)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", 0)]
    #[case("5", 5)]
    #[case("celtic cross", 5)]
    #[case("Horseshoe Spread", 6)]
    #[case(" single card ", 1)]
    fn test_resolve_spread(#[case] arg: &str, #[case] expected: usize) {
        assert_eq!(resolve_spread(arg).unwrap(), expected);
    }

    #[rstest]
    #[case("8")]
    #[case("Pentagram")]
    fn test_resolve_spread_rejects(#[case] arg: &str) {
        assert!(resolve_spread(arg).is_err());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "tarot-tui",
            "--images-dir",
            "/srv/cards",
            "--high-contrast",
            "draw",
            "--spread",
            "celtic cross",
            "--reversed",
            "--seed",
            "9",
        ]);

        assert_eq!(cli.seed, Some(9));
        assert_eq!(
            cli.command,
            Some(Command::Draw {
                spread: Some("celtic cross".to_string()),
                count: None,
                reversed: true,
            })
        );

        let mut config = TuiConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.images_dir, PathBuf::from("/srv/cards"));
        assert!(config.high_contrast);
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_load_config_from_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let stored = TuiConfig {
            default_spread: 2,
            ..TuiConfig::default()
        };
        stored.save_to(&path).unwrap();

        let cli = Cli::parse_from([
            OsStr::new("tarot-tui"),
            OsStr::new("--config"),
            path.as_os_str(),
        ]);
        assert_eq!(cli.load_config().default_spread, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let config = TuiConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/tarot-images.json")),
            ..TuiConfig::default()
        };
        let err = load_deck(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to load card dataset"));
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let deck = Deck::embedded().unwrap();
        let config = TuiConfig::default();

        let a = draw_reading(&deck, &config, Some("5"), None, true, Some(3)).unwrap();
        let b = draw_reading(&deck, &config, Some("5"), None, true, Some(3)).unwrap();
        assert_eq!(a.drawn(), b.drawn());
        assert_eq!(a.drawn().len(), 10);
    }

    #[test]
    fn test_draw_free_count() {
        let deck = Deck::embedded().unwrap();
        let reading =
            draw_reading(&deck, &TuiConfig::default(), None, Some(6), false, Some(1)).unwrap();
        assert_eq!(reading.drawn().len(), 6);
        assert!(reading.drawn().iter().all(|c| !c.reversed && c.position.is_none()));

        assert!(draw_reading(&deck, &TuiConfig::default(), None, Some(0), false, None).is_err());
        assert!(draw_reading(&deck, &TuiConfig::default(), None, Some(79), false, None).is_err());
    }

    #[test]
    fn test_print_reading() {
        let deck = Deck::embedded().unwrap();
        let reading =
            draw_reading(&deck, &TuiConfig::default(), Some("2"), None, false, Some(4)).unwrap();

        let mut out = Vec::new();
        print_reading(&mut out, reading.spread(), reading.drawn(), Path::new("cards")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Past-Present-Future (3 cards)\n"));
        assert!(text.contains(&format!(" 1. Past: {}", reading.drawn()[0].card.name)));
        assert!(text.contains(&format!(" 3. Future: {}", reading.drawn()[2].card.name)));
        assert!(text.contains(&format!("cards/{}", reading.drawn()[1].card.image)));
    }

    #[test]
    fn test_print_config() {
        let mut out = Vec::new();
        print_config(&mut out, &TuiConfig::default()).unwrap();
        let parsed: TuiConfig = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_print_spreads() {
        let mut out = Vec::new();
        print_spreads(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().next().unwrap().contains("None"));
        assert!(text.contains("Celtic Cross (10 cards)"));
        assert!(text.contains("celtic-cross"));
    }
}
