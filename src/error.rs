use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("Unknown base coordinate convention '{0}'")]
    UnknownBaseCoord(String),
    #[error("Unknown windowing function '{0}'")]
    UnknownWindowFunction(String),
    #[error("Unknown renderer '{0}'")]
    UnknownRenderer(String),
}
