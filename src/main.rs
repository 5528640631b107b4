
use sparse_life::{
    out::{self, App},
    proc::Board,
};

const SEED: &str = "\
###
#..
.#.";

const GENERATIONS: u64 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>>{
    simple_logger::init_with_level(log::Level::Info)?;
    let f = Board::from_string(SEED);
    let a = App::new(f, GENERATIONS);
    out::run(a)?;
    Ok(())
}
