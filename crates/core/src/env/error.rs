/// Errors raised when a required oracle was not provided to [`super::SystemEnv`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("clock oracle not available in environment")]
    ClockNotAvailable,

    #[error("item oracle not available in environment")]
    ItemsNotAvailable,
}
