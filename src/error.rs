use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type DumpResult<T> = Result<T, DumpError>;

/// Errors surfaced while fetching or storing a dump. All of them are fatal;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Request construction, transport failure, or a non-success status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Create or write failure on the output file.
    #[error("filesystem error at '{path}': {source}", path = .path.display())]
    File {
        path: PathBuf,
        source: io::Error,
    },

    /// The downloaded archive could not be decompressed.
    #[error("failed to extract archive to '{path}': {source}", path = .path.display())]
    Decompress {
        path: PathBuf,
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::path::Path;

    #[test]
    fn file_error_names_the_path() {
        let err = DumpError::File {
            path: Path::new("/data/nations_2024_03_15.xml").into(),
            source: io::Error::new(ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/nations_2024_03_15.xml"));
        assert!(msg.contains("no such directory"));
    }

    #[test]
    fn decompress_error_names_the_path() {
        let err = DumpError::Decompress {
            path: Path::new("regions_2024_03_15.xml").into(),
            source: io::Error::new(ErrorKind::InvalidData, "invalid gzip header"),
        };
        let msg = err.to_string();
        assert!(msg.contains("regions_2024_03_15.xml"));
        assert!(msg.contains("invalid gzip header"));
    }
}
