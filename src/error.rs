/// Error of a protocol operation.
///
/// `E` is the transport error of the [`Tle75008Driver`](crate::driver::Tle75008Driver).
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    Transport(E),
    /// Channel index outside of the accepted range, as passed by the caller.
    InvalidChannel(u8),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Json(serde_json_core::de::Error),
    Invalid,
}
