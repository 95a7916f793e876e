use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use wordsearch::{Difficulty, PuzzleBuilder, PuzzleConfig};

const WORDS: &[&str] = &[
    "RUST", "CARGO", "BORROW", "TRAIT", "LIFETIME", "MACRO", "CRATE", "MODULE", "CLOSURE",
    "ITERATOR", "PATTERN", "SLICE",
];

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <runs>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let runs: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let targets: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
    let builder = PuzzleBuilder::new(PuzzleConfig {
        margin: 1,
        difficulty: Difficulty::Hard,
        strict: false,
        ..PuzzleConfig::default()
    });

    let mut failures = 0usize;
    let mut placed = 0usize;
    for _ in 0..runs {
        let puzzle = builder.build(&mut rng, &targets, &[])?;
        placed += puzzle.words().len();
        if !puzzle.dropped().is_empty() {
            failures += 1;
        }
    }

    let result = json!({
        "runs": runs,
        "failures": failures,
        "placed": placed,
        "words": WORDS.len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
