use crate::{
    game::{GameState, Side},
    table::{Round, Table},
};

/// Add `delta` to every edge touched in `round` whose state has `side` to move,
/// and subtract it from the rest.
pub fn backpropagate<S: GameState>(table: &mut Table<S>, delta: i8, side: Side, round: Round) {
    for (state, action) in table.records_in_round(round) {
        let signed = if state.side_to_move() == side {
            i32::from(delta)
        } else {
            -i32::from(delta)
        };
        if let Some(edge) = table.find_edge_mut(&state, action) {
            edge.utility += signed;
        }
    }
}
