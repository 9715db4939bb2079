mod matrix;
mod random;

pub use matrix::{MatrixScanner, init_matrix};
pub use random::seeded_rng;
