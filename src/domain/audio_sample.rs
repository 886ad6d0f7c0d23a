use std::io;
use std::path::PathBuf;

use bytes::Bytes;

/// Recorded or uploaded audio, either on disk or already in memory.
#[derive(Debug, Clone)]
pub enum AudioSample {
    File(PathBuf),
    Buffer(Bytes),
}

impl AudioSample {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::Buffer(data.into())
    }

    /// Loads the audio content. Missing or empty content is an error.
    pub async fn read(&self) -> io::Result<Bytes> {
        let data = match self {
            AudioSample::File(path) => Bytes::from(tokio::fs::read(path).await?),
            AudioSample::Buffer(data) => data.clone(),
        };

        if data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "audio sample is empty",
            ));
        }

        Ok(data)
    }
}
