//! CLI command implementations

mod batch;
mod matrix;
mod simulate;

pub use batch::cmd_batch;
pub use matrix::cmd_matrix;
pub use simulate::cmd_simulate;
