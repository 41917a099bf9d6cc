use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// One of the three required input lists was absent at the boundary.
    /// This is the only validation the engine performs; no partial result
    /// is computed.
    #[error("missing input data: {0}")]
    MissingInput(&'static str),
}
