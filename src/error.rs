/// Errors returned by the runtime and the transport seams.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A worker context is missing a connection or holds an invalid value.
    #[error("invalid context: {0}")]
    InvalidContext(String),

    /// The channel on the other side of a seam is gone.
    #[error("channel disconnected")]
    ChannelClosed,

    /// The OS refused to spawn a worker thread.
    #[error(transparent)]
    ThreadStart(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidContext`].
    #[inline]
    pub fn context<T: Into<String>>(what: T) -> Self {
        Self::InvalidContext(what.into())
    }
}
