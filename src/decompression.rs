//! Transparent decompression of input files
//!
//! Detects gzip (1F 8B 08) and zstd (28 B5 2F FD) streams by magic bytes, so
//! compressed inputs work regardless of their file extension. Everything else
//! passes through unchanged.

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 3] = [0x1F, 0x8B, 0x08];
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Open a file for reading, decompressing gzip/zstd content on the fly.
pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref)
        .with_context(|| format!("cannot open input file '{}'", path_ref.display()))?;
    maybe_decompress(file)
        .with_context(|| format!("cannot read input file '{}'", path_ref.display()))
}

/// Wrap any reader with magic-byte compression detection.
pub fn maybe_decompress<R: Read + 'static>(mut reader: R) -> Result<Box<dyn BufRead>> {
    let mut head = [0u8; 4];
    let mut filled = 0;
    while filled < head.len() {
        let n = reader.read(&mut head[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    // Put the sniffed bytes back in front using a cursor chain
    let chained = Cursor::new(head[..filled].to_vec()).chain(reader);

    if filled >= GZIP_MAGIC.len() && head[..3] == GZIP_MAGIC {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(chained))))
    } else if filled >= ZSTD_MAGIC.len() && head == ZSTD_MAGIC {
        let decoder = zstd::Decoder::new(chained)?;
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(chained)))
    }
}
