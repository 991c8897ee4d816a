use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid token {token:?}, expected {expected}")]
    InvalidToken { token: String, expected: &'static str },

    #[error("vertex {vertex} out of range for {num_nodes} vertices")]
    VertexOutOfRange { vertex: usize, num_nodes: usize },

    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    #[error("duplicate edge {0} {1}")]
    DuplicateEdge(usize, usize),

    #[error("edge {0} {1} must have a positive capacity")]
    NonPositiveCapacity(usize, usize),

    #[error("unexpected input after the last edge: {0:?}")]
    TrailingInput(String),

    #[error("a flow network needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("Incorrect dimensions!")]
    InvalidDimensions { height: i64, width: i64 },

    #[error("Incorrect input!")]
    InvalidCell(char),

    #[error("missing cell {0:?}")]
    MissingEndpoint(char),

    #[error("cell {0:?} appears more than once")]
    RepeatedEndpoint(char),

    #[error("invalid query type {0}")]
    InvalidQueryType(u64),

    #[error("position {index} out of range for {len} values")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid range {0}..={1}")]
    InvalidRange(usize, usize),
}
