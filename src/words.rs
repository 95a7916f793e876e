//! Word lists: normalization, parsing and filler sampling.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

/// Strip whitespace (line breaks included) and uppercase. Returns `None` for
/// a word that ends up empty or contains anything other than A–Z.
pub fn normalize_word(word: &str) -> Option<Vec<char>> {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if letters.is_empty() || !letters.iter().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some(letters)
}

/// One uppercased word per non-empty line.
pub fn parse_lines(data: &str) -> Vec<String> {
    data.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.to_uppercase())
        .collect()
}

/// Sample up to `count` distinct entries of `pool` no longer than `max_len`.
/// Returns every eligible word when fewer than `count` exist.
pub fn sample_filler<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[String],
    count: usize,
    max_len: usize,
) -> Vec<String> {
    let eligible: Vec<&String> = pool
        .iter()
        .filter(|w| w.chars().count() <= max_len)
        .collect();
    let amount = count.min(eligible.len());
    rand::seq::index::sample(rng, eligible.len(), amount)
        .into_iter()
        .map(|i| eligible[i].clone())
        .collect()
}

/// Read a word list file, one word per line.
#[cfg(feature = "std")]
pub fn read_word_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Vec<String>> {
    use anyhow::Context;

    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(parse_lines(&data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn normalize_strips_whitespace_and_uppercases() {
        let letters = normalize_word(" ice cream\r\n").unwrap();
        assert_eq!(letters.iter().collect::<String>(), "ICECREAM");
    }

    #[test]
    fn normalize_rejects_empty_and_non_letters() {
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word(" \n"), None);
        assert_eq!(normalize_word("R2D2"), None);
        assert_eq!(normalize_word("CAFÉ"), None);
    }

    #[test]
    fn parse_lines_skips_blank_lines() {
        let words = parse_lines("cat\n\ndog\nbird");
        assert_eq!(words, vec!["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn sample_filler_respects_max_len_and_count() {
        let pool: Vec<String> = ["A", "BB", "CCC", "DDDDDDDD", "EE"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut rng = SmallRng::seed_from_u64(7);
        let sample = sample_filler(&mut rng, &pool, 3, 3);
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|w| w.len() <= 3));

        let mut dedup = sample.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), sample.len());
    }

    #[test]
    fn sample_filler_returns_all_when_pool_is_short() {
        let pool: Vec<String> = vec!["AB".into(), "TOOLONGWORD".into()];
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(sample_filler(&mut rng, &pool, 10, 7), vec!["AB".to_string()]);
    }
}
