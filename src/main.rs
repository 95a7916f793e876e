#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use wordsearch::{
    init_logging, read_word_file, Difficulty, PuzzleBuilder, PuzzleConfig, PuzzleView,
    DEFAULT_MARGIN, FILLER_MAX_LEN, RETRY_WORD_PLACEMENT_CNT, TOTAL_WORDS_IN_SEARCH,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Log level, overrides WORDSEARCH_LOG (e.g., --log-level debug)")]
    log_level: Option<log::LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a word search from a list of words, one per line.
    Generate {
        #[arg(long, help = "File with the words to hide")]
        words: PathBuf,
        #[arg(long, help = "Dictionary to sample filler words from")]
        filler: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible puzzles (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_MARGIN)]
        margin: usize,
        #[arg(long, default_value_t = RETRY_WORD_PLACEMENT_CNT)]
        retries: usize,
        #[arg(long, default_value_t = TOTAL_WORDS_IN_SEARCH)]
        total: usize,
        #[arg(long, help = "Drop words that do not fit instead of failing")]
        lenient: bool,
        #[arg(long, help = "Lay filler words out like targets instead of horizontally")]
        vary_filler: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Generate {
            words,
            filler,
            difficulty,
            seed,
            margin,
            retries,
            total,
            lenient,
            vary_filler,
            format,
        } => {
            let targets = read_word_file(&words)?;
            let pool = match filler {
                Some(path) => read_word_file(path)?,
                None => Vec::new(),
            };
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (puzzle will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let config = PuzzleConfig {
                margin,
                retries,
                difficulty,
                total_words: total,
                filler_max_len: FILLER_MAX_LEN,
                strict: !lenient,
                filler_uses_policy: vary_filler,
            };
            let puzzle = PuzzleBuilder::new(config)
                .build(&mut rng, &targets, &pool)
                .with_context(|| format!("could not build puzzle from {}", words.display()))?;

            match format {
                OutputFormat::Text => println!("{}", puzzle),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(&PuzzleView::from(&puzzle))?)
                }
            }
            if !puzzle.dropped().is_empty() {
                log::warn!("Dropped words: {}", puzzle.dropped().join(", "));
            }
        }
    }
    Ok(())
}
