use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("need at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("row #{0:02} has {1} entries, expected {2}")]
    NotSquare(usize, usize, usize),
    #[error("distance ({0}, {1}) is not finite: {2}")]
    NonFiniteDistance(usize, usize, f64),
    #[error("distance ({0}, {1}) is negative: {2}")]
    NegativeDistance(usize, usize, f64),
    #[error("diagonal entry #{0:02} must be zero, got {1}")]
    NonZeroDiagonal(usize, f64),
    #[error("distance ({0}, {1}) = {2} differs from ({1}, {0}) = {3}")]
    Asymmetric(usize, usize, f64, f64),
    #[error("nodes #{0:02} and #{1:02} coincide (zero distance) and zero_distance policy is reject")]
    CoincidentNodes(usize, usize),
    #[error("parameter `{0}` = {1} is outside {2}")]
    InvalidParameter(&'static str, f64, &'static str),
    #[error("fixed start node #{0:02} is out of range for {1} nodes")]
    StartOutOfRange(usize, usize),
    #[error("pheromone bounds [{0}, {1}] must satisfy 0 < min <= max")]
    InvalidBounds(f64, f64),
    #[error("problem file has neither `cities` nor `distances`")]
    EmptyProblem,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
