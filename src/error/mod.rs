mod args;
mod io;
mod solution;

pub use args::ArgumentError;
pub use io::IoError;
pub use solution::SolutionError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Solution(#[from] SolutionError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

pub type Result<T> = std::result::Result<T, Error>;
