use std::io::{ self, Write };

use log::debug;

use crate::proc::{ Board, Cell };

type Err = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Err>;

pub struct App {
    field: Board,
    maxgen: u64,
}

impl App {

    #[inline]
    pub fn new(field: Board, maxgen: u64) -> Self {
        App {
            field,
            maxgen,
        }
    }

    #[inline]
    pub fn maxgen(&self) -> u64 {
        self.maxgen
    }
}

pub fn run(mut a: App) -> Result<()> {
    let mut out = io::stdout();

    let mut gen = 0u64;
    while gen < a.maxgen() {
        gen += 1;
        a.field.tick();
        debug!("generation {gen}: {} live cells", a.field.population());
        writeln!(out, "{}", render(&a.field))?;
        out.flush()?;
    }
    Ok(())
}

fn render(field: &Board) -> String {
    let mut cells: Vec<Cell> = field.cells().iter().copied().collect();
    cells.sort();

    let mut line = String::from("{");
    for (i, (x, y)) in cells.into_iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        line.push_str(&format!("({x}, {y})"));
    }
    line.push('}');
    line
}
