use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("board of {width}x{height} cells is too large")]
    BoardTooLarge { width: usize, height: usize },

    #[error("expected {expected} tiles, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error(
        "pattern {name:?} is {pattern_width}x{pattern_height} but the board is only {board_width}x{board_height}"
    )]
    PatternTooLarge {
        name: String,
        pattern_width: usize,
        pattern_height: usize,
        board_width: usize,
        board_height: usize,
    },

    #[error("malformed pattern {name:?}: {reason}")]
    MalformedPattern { name: String, reason: String },

    #[error("invalid color {0:?}, expected rrggbb or #rrggbb")]
    InvalidColor(String),
}
