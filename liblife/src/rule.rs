use crate::board::TileState;

/// Standard Conway transition (B3/S23).
pub fn next_state(current: TileState, alive_neighbors: usize) -> TileState {
    match (current, alive_neighbors) {
        (TileState::Alive, 2 | 3) => TileState::Alive,
        (TileState::Dead, 3) => TileState::Alive,
        _ => TileState::Dead,
    }
}
