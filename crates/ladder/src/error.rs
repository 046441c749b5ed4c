pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] ladder_graphlib::Error),

    #[error("a ladder step adds exactly one new vertex: supply either `ud` or `vd`")]
    InvalidLadderStep,

    #[error("an edge route has exactly six points, got {len}")]
    InvalidRoute { len: usize },
}
