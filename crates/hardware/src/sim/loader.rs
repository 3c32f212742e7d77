//! Image Loader.
//!
//! This module provides utilities for getting program images into memory. It performs:
//! 1. **File loading:** Reads a raw image from disk into a byte buffer.
//! 2. **Placement:** Copies an image into memory at a base address, checking it fits.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::constants::ADDRESS_SPACE;
use crate::soc::Memory;

/// Errors raised while loading an image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read image '{}': {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The image does not fit between its base address and the end of memory.
    #[error("image of {len} bytes does not fit at {base:#06x}")]
    TooLarge {
        /// Requested base address.
        base: u16,
        /// Image length in bytes.
        len: usize,
    },
}

/// Reads a raw image file.
///
/// # Arguments
///
/// * `path` - Path to the image.
///
/// # Returns
///
/// The file's bytes, or [`LoadError::Io`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies `image` into memory starting at `base`.
///
/// # Returns
///
/// [`LoadError::TooLarge`] if the image would run past `0xFFFF`; memory is
/// left untouched in that case.
pub fn load_image(mem: &mut dyn Memory, base: u16, image: &[u8]) -> Result<(), LoadError> {
    if usize::from(base) + image.len() > ADDRESS_SPACE {
        return Err(LoadError::TooLarge {
            base,
            len: image.len(),
        });
    }
    mem.store_bytes(base, image);
    tracing::debug!(base = format_args!("{base:#06x}"), len = image.len(), "image loaded");
    Ok(())
}
