use std::collections::HashSet;

pub type Cell = (i64, i64);

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Board {
    cells: HashSet<Cell>,
}

// Moore neighborhood, fixed order: E, W, N, S, then diagonals.
pub fn neighbors((x, y): Cell) -> impl Iterator<Item = Cell> {
    [
        (x + 1, y),
        (x - 1, y),
        (x, y + 1),
        (x, y - 1),
        (x + 1, y + 1),
        (x + 1, y - 1),
        (x - 1, y + 1),
        (x - 1, y - 1),
    ]
    .into_iter()
}

impl Board {

    #[inline]
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Board {
            cells: cells.into_iter().collect(),
        }
    }

    #[inline]
    pub fn from_string(s: &str) -> Self {
        let mut cells = HashSet::new();

        for (y, row) in s.split('\n').filter(|r| !r.is_empty()).enumerate() {
            for (x, c) in row.chars().enumerate() {
                match c {
                    '0' | '.' | ' ' => {},
                    _ => {
                        cells.insert((x as i64, y as i64));
                    },
                }
            }
        }

        Board {
            cells,
        }
    }

    #[inline]
    pub fn cells<'a>(&'a self) -> &'a HashSet<Cell> {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn advance(&self) -> Board {
        // Only live cells and their neighbors can change state.
        let recalc: HashSet<Cell> = self.cells
            .iter()
            .copied()
            .chain(self.cells.iter().copied().flat_map(neighbors))
            .collect();

        let cells = recalc
            .into_iter()
            .filter(|&c| {
                let n = neighbors(c).filter(|&w| self.contains(w)).count();
                Self::produce_value(self.contains(c), n)
            })
            .collect();

        Board {
            cells,
        }
    }

    pub fn tick(&mut self) {
        *self = self.advance();
    }

    fn produce_value(current: bool, n: usize) -> bool {
        n == 3 || (n == 2 && current)
    }
}
