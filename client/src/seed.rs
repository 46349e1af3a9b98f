use liblife::{
    Pattern,
    board::GameBoard,
    pattern::library::{BLINKER, BLOCK, GLIDER, LOAF, PULSAR, TUB},
    place,
};
use rand::Rng;
use tracing::{debug, warn};

/// Shapes stamped onto a fresh board, in order, with how many copies of each.
pub fn seed_plan() -> [(&'static Pattern, usize); 7] {
    [
        (&GLIDER, 20),
        (&BLOCK, 25),
        (&LOAF, 20),
        (&TUB, 30),
        (&BLINKER, 25),
        (&PULSAR, 10),
        (&GLIDER, 30),
    ]
}

/// Runs the seed plan against `board`, returning how many patterns were placed.
///
/// Shapes that don't fit the board are skipped with a warning.
pub fn seed_board<R>(board: &mut GameBoard, rng: &mut R) -> usize
where
    R: Rng,
{
    let mut placed = 0;

    for (pattern, copies) in seed_plan() {
        for _ in 0..copies {
            match place::place_random(board, pattern, rng) {
                Ok(origin) => {
                    debug!(pattern = pattern.name(), x = origin.x, y = origin.y, "placed");
                    placed += 1;
                }
                Err(err) => {
                    warn!("skipping seed shape: {err}");
                    break;
                }
            }
        }
    }

    placed
}
