//! Square Go board with row/column addressing.
//!
//! A cell is `Option<Color>`: `None` is an empty point. The board owns its
//! cells, so `clone()` yields an independent copy that never aliases the
//! source. Search relies on this to explore each branch on its own board.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Dense index for per-color arrays (Black = 0, White = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A board position as `(row, col)`, both zero-based from the top left.
pub type Point = (usize, usize);

/// Iterator over the in-bounds orthogonal neighbours of a point.
pub type Neighbors = std::iter::Flatten<std::array::IntoIter<Option<Point>, 4>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compact `row * size + col` encoding, used as a key for visited sets.
    #[inline]
    pub fn index(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `pt`, or `None` if the point is empty or off the board.
    #[inline]
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !self.contains(pt) {
            return None;
        }
        self.cells[self.index(pt)]
    }

    #[inline]
    pub fn is_empty_at(&self, pt: Point) -> bool {
        self.contains(pt) && self.cells[self.index(pt)].is_none()
    }

    /// Put a stone on `pt` without any rule checking.
    pub fn place(&mut self, pt: Point, color: Color) {
        let i = self.index(pt);
        self.cells[i] = Some(color);
    }

    pub fn remove(&mut self, pt: Point) {
        let i = self.index(pt);
        self.cells[i] = None;
    }

    /// Orthogonal neighbours of `pt` that lie on the board (2 to 4 entries).
    pub fn neighbors(&self, (row, col): Point) -> Neighbors {
        let s = self.size;
        [
            (row > 0).then(|| (row - 1, col)),
            (row + 1 < s).then(|| (row + 1, col)),
            (col > 0).then(|| (row, col - 1)),
            (col + 1 < s).then(|| (row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Every point of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    /// Points occupied by `color`, in row-major order.
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&pt| self.get(pt) == Some(color))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    pub fn is_edge(&self, (row, col): Point) -> bool {
        let last = self.size.saturating_sub(1);
        row == 0 || col == 0 || row == last || col == last
    }

    pub fn is_corner(&self, (row, col): Point) -> bool {
        let last = self.size.saturating_sub(1);
        (row == 0 || row == last) && (col == 0 || col == last)
    }

    /// Manhattan distance from `pt` to the center point `(size/2, size/2)`.
    pub fn center_distance(&self, (row, col): Point) -> usize {
        let c = self.size / 2;
        row.abs_diff(c) + col.abs_diff(c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("board has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
    #[error("unexpected character {0:?}")]
    BadCell(char),
}

/// Parses the same layout `Display` produces: one line per row, `X` for
/// Black, `O` for White, `.` for empty. Spaces between cells are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                match ch {
                    'X' | 'x' | 'B' | 'b' => board.place((row, col), Color::Black),
                    'O' | 'o' | 'W' | 'w' => board.place((row, col), Color::White),
                    '.' | '+' => {}
                    other => return Err(ParseBoardError::BadCell(other)),
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get((row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
