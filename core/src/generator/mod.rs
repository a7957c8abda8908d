use crate::*;
pub use fractal::*;
pub use manual::*;
pub use spanning_tree::*;

mod fractal;
mod manual;
mod spanning_tree;
mod union_find;

/// Board-construction strategy.
pub trait BoardGenerator {
    fn generate(self, size: Coord2) -> Result<BoardLayout>;
}
