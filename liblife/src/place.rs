use rand::Rng;

use crate::{
    board::{GameBoard, TileState},
    error::LifeError,
    pattern::Pattern,
    pos::Position,
};

/// Stamps `pattern` with its top-left corner at `origin`.
///
/// Pattern cells overwrite whatever the board held, dead cells included. Cells that would land
/// outside the board are skipped; placement never wraps. Returns how many cells were written.
pub fn place(board: &mut GameBoard, origin: Position, pattern: &Pattern) -> usize {
    let mut written = 0;

    for (dx, dy, alive) in pattern.cells() {
        let (Some(x), Some(y)) = (origin.x.checked_add(dx), origin.y.checked_add(dy)) else {
            continue;
        };

        if let Some(tile) = board.tile_mut((x, y)) {
            *tile = TileState::from(alive);
            written += 1;
        }
    }

    written
}

/// Stamps `pattern` at a uniformly random origin where it fits entirely on the board.
pub fn place_random<R>(board: &mut GameBoard, pattern: &Pattern, rng: &mut R) -> Result<Position, LifeError>
where
    R: Rng,
{
    let origin = random_origin(board, pattern, rng)?;
    place(board, origin, pattern);
    Ok(origin)
}

fn random_origin<R>(board: &GameBoard, pattern: &Pattern, rng: &mut R) -> Result<Position, LifeError>
where
    R: Rng,
{
    let (Some(max_x), Some(max_y)) = (
        board.width().checked_sub(pattern.width()),
        board.height().checked_sub(pattern.height()),
    ) else {
        return Err(LifeError::PatternTooLarge {
            name: pattern.name().to_owned(),
            pattern_width: pattern.width(),
            pattern_height: pattern.height(),
            board_width: board.width(),
            board_height: board.height(),
        });
    };

    Ok(Position {
        x: rng.random_range(0..=max_x),
        y: rng.random_range(0..=max_y),
    })
}
