use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vertex {index} is out of range for a graph with {num_nodes} nodes")]
    OutOfRange { index: usize, num_nodes: usize },

    #[error("{0} does not fit in the weight type")]
    Overflow(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse { line, message: message.into() }
    }
}

// index checks shared by every algorithm entry point
pub(crate) fn check_node(index: usize, num_nodes: usize) -> Result<()> {
    if index >= num_nodes {
        return Err(Error::OutOfRange { index, num_nodes });
    }
    Ok(())
}
