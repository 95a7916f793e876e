/// Glyph used when rendering a cell that holds no letter yet.
pub const EMPTY_CELL_CHAR: char = '.';
/// Letters a placed word or the fill pass may write.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Cells added to the longest target word to size the grid.
pub const DEFAULT_MARGIN: usize = 3;
/// Targets plus filler words placed in one puzzle.
pub const TOTAL_WORDS_IN_SEARCH: usize = 20;
/// Longest filler word sampled from the dictionary.
pub const FILLER_MAX_LEN: usize = 7;
pub const RETRY_WORD_PLACEMENT_CNT: usize = 1;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "WORDSEARCH_LOG";
