use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("window length must be at least 1, got {0}")]
    InvalidWindow(usize),

    #[error("number of cycles must be finite, got {0}")]
    InvalidCycles(f32),

    #[error("failed to write {channel} output")]
    Io {
        channel: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    pub fn io(channel: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| BenchError::Io { channel, source }
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error as _, io};

    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        assert_eq!(
            BenchError::InvalidWindow(0).to_string(),
            "window length must be at least 1, got 0"
        );
        assert_eq!(
            BenchError::InvalidCycles(f32::NAN).to_string(),
            "number of cycles must be finite, got NaN"
        );
    }

    #[test]
    fn io_keeps_channel_and_source() {
        let err = BenchError::io("data")(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to write data output");

        let source = err.source().expect("io errors carry their cause");
        assert_eq!(source.to_string(), "pipe closed");
        assert!(matches!(err, BenchError::Io { channel: "data", .. }));
    }
}
