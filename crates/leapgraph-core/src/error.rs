use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("graph must have at least one node")]
    EmptyGraph,
}
