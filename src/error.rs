//! Crate-level error types.

use std::fmt;

/// Errors produced by the voxview crate.
///
/// Camera operations never fail; these cover the surrounding system
/// (configuration files, the HUD worker, and the shader light block).
#[derive(Debug)]
pub enum VoxviewError {
    /// The shader's light block size does not match [`LightBlock`].
    ///
    /// [`LightBlock`]: crate::lighting::LightBlock
    LayoutMismatch {
        /// Byte size the CPU-side block occupies.
        expected: u64,
        /// Byte size the shader declared.
        actual: u64,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VoxviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayoutMismatch { expected, actual } => write!(
                f,
                "shader light block is {actual} bytes, expected {expected}"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VoxviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VoxviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
