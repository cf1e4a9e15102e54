mod history;
mod tour;

pub use history::{IterationSummary, RunResult, Termination};
pub use tour::Tour;
