//! Upload payloads.

use std::fmt;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{DropboxError, Result};

/// Where the bytes of an upload come from.
///
/// Payloads are consumed by a single upload call and fully buffered before
/// the request is sent. The remote name always comes from the target path
/// given to the upload call, never from the source.
pub enum UploadSource {
    /// A local file, opened and read by the upload call.
    FilePath(PathBuf),
    /// An already-open stream, read to the end.
    Reader(Box<dyn AsyncRead + Send + Unpin>),
    /// An in-memory buffer.
    Bytes(Vec<u8>),
}

impl UploadSource {
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        UploadSource::FilePath(path.into())
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        UploadSource::Reader(Box::new(reader))
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        UploadSource::Bytes(data.into())
    }

    /// Validate the payload and read it into memory.
    ///
    /// Fails with [`DropboxError::InvalidArgument`] when a path does not
    /// lead to a regular file, and with [`DropboxError::Io`] when reading
    /// fails part way.
    pub(crate) async fn read_all(self) -> Result<Vec<u8>> {
        match self {
            UploadSource::FilePath(path) => {
                check_regular_file(&path).await?;
                let mut file = tokio::fs::File::open(&path).await?;
                let mut data = Vec::new();
                file.read_to_end(&mut data).await?;
                Ok(data)
            }
            UploadSource::Reader(mut reader) => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data).await?;
                Ok(data)
            }
            UploadSource::Bytes(data) => Ok(data),
        }
    }
}

impl fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadSource::FilePath(path) => f.debug_tuple("FilePath").field(path).finish(),
            UploadSource::Reader(_) => f.debug_tuple("Reader").finish_non_exhaustive(),
            UploadSource::Bytes(data) => f
                .debug_struct("Bytes")
                .field("len", &data.len())
                .finish(),
        }
    }
}

impl From<PathBuf> for UploadSource {
    fn from(path: PathBuf) -> Self {
        UploadSource::FilePath(path)
    }
}

impl From<&Path> for UploadSource {
    fn from(path: &Path) -> Self {
        UploadSource::FilePath(path.to_path_buf())
    }
}

impl From<Vec<u8>> for UploadSource {
    fn from(data: Vec<u8>) -> Self {
        UploadSource::Bytes(data)
    }
}

async fn check_regular_file(path: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        DropboxError::InvalidArgument(format!(
            "Cannot read upload file {}: {}",
            path.display(),
            e
        ))
    })?;
    if !metadata.is_file() {
        return Err(DropboxError::InvalidArgument(format!(
            "Upload path is not a regular file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Stream that hands out some bytes and then fails.
#[cfg(test)]
pub(crate) struct BrokenReader {
    pub(crate) sent: bool,
}

#[cfg(test)]
impl AsyncRead for BrokenReader {
    fn poll_read(
        mut self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
        buf: &mut tokio::io::ReadBuf<'_>,
    ) -> std::task::Poll<std::io::Result<()>> {
        if !self.sent {
            self.sent = true;
            buf.put_slice(b"partial");
            return std::task::Poll::Ready(Ok(()));
        }
        std::task::Poll::Ready(Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "stream reset",
        )))
    }
}
