use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::dim2;
use crate::*;

/// Rectangular grid of [`Cell`]s indexed by `(row, col)`.
///
/// Operations that change the board return a new value, the receiver is left untouched. The size
/// and the number of mines never change after construction.
///
/// Deserialized boards recompute their mine count from the cells and reject grids whose sides do
/// not fit a [`Coord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct BoardRepr {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let (height, width) = repr.cells.dim();
        if height > Coord::MAX as usize || width > Coord::MAX as usize {
            return Err(GameError::InvalidBoardShape);
        }

        let mine_count = count_cells(repr.cells.iter().filter(|cell| cell.mined));
        if mine_count != repr.mine_count {
            log::warn!(
                "Stored mine count {} does not match the board, using {}",
                repr.mine_count,
                mine_count
            );
        }

        Ok(Self {
            cells: repr.cells,
            mine_count,
        })
    }
}

impl Board {
    /// Board of the given `(height, width)` with no mines.
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }

        Ok(board)
    }

    pub fn game_config(&self) -> GameConfig {
        let (height, width) = self.size();
        GameConfig::new_unchecked(width, height, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (height, width) = self.size();
        row < height && col < width
    }

    /// `(height, width)` of the board.
    pub fn size(&self) -> Coord2 {
        dim2(&self.cells)
    }

    pub fn total_cells(&self) -> CellCount {
        let (height, width) = self.size();
        mult(height, width)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Mined cells that do not carry a flag.
    pub fn unflagged_mine_count(&self) -> CellCount {
        count_cells(self.cells.iter().filter(|cell| cell.is_unflagged_mine()))
    }

    pub fn flagged_count(&self) -> CellCount {
        count_cells(self.cells.iter().filter(|cell| cell.flagged))
    }

    pub fn revealed_count(&self) -> CellCount {
        count_cells(self.cells.iter().filter(|cell| cell.revealed))
    }

    /// Number of mines touching `coords`, diagonals included. Zero for out-of-bounds coordinates.
    pub(crate) fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        if !self.contains(coords) {
            return 0;
        }

        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].mined)
            .count();
        // at most 8 neighbors
        count as u8
    }

    /// Iterates every cell in row-major order along with its coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Copy of this board with the flag at `coords` flipped.
    ///
    /// Revealed and out-of-bounds cells are left alone.
    pub fn flag_toggled(&self, coords: Coord2) -> Board {
        let mut next = self.clone();

        if let Some(cell) = next.cells.get_mut(coords.to_nd_index()) {
            if cell.can_flag() {
                cell.flagged = !cell.flagged;
                log::debug!("Flag at {:?} set to {}", coords, cell.flagged);
            }
        }

        next
    }

    /// Copy of this board with every cell revealed, as shown once a game is lost.
    ///
    /// Unmined cells get their adjacency value, mined cells keep `val` unset.
    pub fn fully_revealed(&self) -> Board {
        let mut next = self.clone();

        for ((row, col), cell) in next.cells.indexed_iter_mut() {
            if !cell.mined && cell.val.is_none() {
                cell.val = Some(self.adjacent_mine_count((row as Coord, col as Coord)));
            }
            cell.revealed = true;
        }

        next
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Marks `coords` as mined, returning whether it was free before.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.mined {
            return false;
        }
        cell.mined = true;
        self.mine_count += 1;
        true
    }

    pub(crate) fn fill_mines(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.mined = true);
        self.mine_count = self.total_cells();
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn iter_orthogonal(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_orthogonal(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Counts the mines around `coords`, up to 8. Out-of-bounds coordinates count as 0.
pub fn count_adjacent_mines(board: &Board, coords: Coord2) -> u8 {
    board.adjacent_mine_count(coords)
}

fn count_cells<'a>(cells: impl Iterator<Item = &'a Cell>) -> CellCount {
    // boards never exceed u8::MAX * u8::MAX cells
    cells.count() as CellCount
}
