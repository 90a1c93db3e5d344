use flate2::read::GzDecoder;
use log::info;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{DumpError, DumpResult};

/// Creates an empty output file, for runs that skip the network.
/// The parent directory must already exist.
pub fn write_placeholder(path: &Path) -> DumpResult<()> {
    info!("Creating dry run output file at {}", path.display());

    File::create(path).map_err(|source| DumpError::File {
        path: path.into(),
        source,
    })?;

    Ok(())
}

/// Copies the compressed body verbatim to `path`, with a `.gz` suffix
/// appended to the file name.
pub fn write_raw<R: Read>(mut body: R, path: &Path) -> DumpResult<()> {
    let path = with_gz_suffix(path);
    info!("Saving dump to {}", path.display());

    let file = File::create(&path).map_err(|source| DumpError::File {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let bytes = io::copy(&mut body, &mut writer)
        .and_then(|bytes| writer.flush().map(|_| bytes))
        .map_err(|source| DumpError::File {
            path: path.clone(),
            source,
        })?;

    info!("Wrote {} bytes", bytes);

    Ok(())
}

/// Extracts the gzip-compressed body to `path` as it is read.
pub fn write_decompressed<R: Read>(body: R, path: &Path) -> DumpResult<()> {
    info!("Saving dump to {}", path.display());

    let file = File::create(path).map_err(|source| DumpError::File {
        path: path.into(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let mut decoder = GzDecoder::new(body);
    let bytes = io::copy(&mut decoder, &mut writer)
        .and_then(|bytes| writer.flush().map(|_| bytes))
        .map_err(|source| DumpError::Decompress {
            path: path.into(),
            source,
        })?;

    info!("Wrote {} bytes", bytes);

    Ok(())
}

fn with_gz_suffix(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".gz");
    PathBuf::from(name)
}
