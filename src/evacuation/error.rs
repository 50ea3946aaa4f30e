use thiserror::Error;

/// Input rejected before any graph is built.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum InputError {
    #[error("capacity matrix is not square: row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix { row: usize, found: usize, expected: usize },
    #[error("entrance index {0} is out of range")]
    EntranceOutOfRange(usize),
    #[error("exit index {0} is out of range")]
    ExitOutOfRange(usize),
    #[error("negative capacity at row {row}, column {col}")]
    NegativeCapacity { row: usize, col: usize },
}
