use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Reveals `coords` on a copy of `board`, flood-filling through zero-valued cells.
///
/// Out-of-bounds, mined, flagged and already revealed targets give back an unchanged board. The
/// engine never opens a mine and does not report one either: callers check the target cell
/// themselves to detect a losing move.
///
/// From a zero-valued cell the fill continues left, right, up and down. Diagonal cells are only
/// reached through their own orthogonal chains. Flags on unmined cells reached by the fill are
/// cleared.
pub fn reveal(board: &Board, coords: Coord2) -> Board {
    let mut next = board.clone();

    match board.cell_at(coords) {
        Some(cell) if cell.can_reveal() && !cell.mined => {
            let opened = next.flood_reveal(coords);
            log::debug!("Revealed {} cell(s) from {:?}", opened, coords);
        }
        _ => log::trace!("Nothing to reveal at {:?}", coords),
    }

    next
}

impl Board {
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut visited = BTreeSet::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let cell = self[visit_coords];
            if cell.mined || cell.revealed {
                continue;
            }

            let val = self.adjacent_mine_count(visit_coords);
            *self.cell_mut(visit_coords) = Cell {
                revealed: true,
                flagged: false,
                val: Some(val),
                ..cell
            };
            opened += 1;
            log::trace!("Opened cell at {:?}, mine count: {}", visit_coords, val);

            if val == 0 {
                to_visit.extend(
                    self.iter_orthogonal(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        opened
    }
}
