//! Error types for texture storage operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure the storage engine can report:
//! - Texture creation (shape validation, allocation)
//! - Addressed access (side/level/layer and texel coordinates)
//! - Texel read/write and format conversion
//! - Serialization
//!
//! Nothing in the engine panics on bad input. Operations that hand back a
//! [`Texture`](crate::Texture) come in two flavors: a `try_*` form returning
//! this error, and a convenience form that logs it and returns a null texture.
//!
//! # Usage
//!
//! ```rust
//! use texkit_core::{Error, Result};
//!
//! fn check_level(level: u32, levels: u32) -> Result<()> {
//!     if level >= levels {
//!         return Err(Error::out_of_bounds("level", level, levels));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_level(3, 2).unwrap_err().is_bounds_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during texture operations.
///
/// # Categories
///
/// - **Creation errors**: [`InvalidParameters`](Error::InvalidParameters),
///   [`AllocationFailed`](Error::AllocationFailed)
/// - **Access errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Format errors**: [`UnsupportedFormat`](Error::UnsupportedFormat)
/// - **Decode errors**: [`DecodeMismatch`](Error::DecodeMismatch), [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// Bad shape or format passed to texture creation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use texkit_core::Error;
    ///
    /// let err = Error::invalid_parameters("cube map faces must be square");
    /// assert!(err.to_string().contains("square"));
    /// ```
    #[error("invalid texture parameters: {reason}")]
    InvalidParameters {
        /// What was wrong
        reason: String,
    },

    /// The backing buffer could not be allocated.
    ///
    /// Covers both size overflow while computing the layout and the
    /// allocator refusing the request.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested (saturated on overflow)
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// An addressed accessor was given a coordinate outside the texture.
    #[error("{what} {value} out of bounds (limit {limit})")]
    OutOfBounds {
        /// Which coordinate: `"side"`, `"level"`, `"layer"`, `"x"`, `"y"` or `"z"`
        what: &'static str,
        /// Requested value
        value: u32,
        /// Exclusive upper bound
        limit: u32,
    },

    /// Deserialized payload length disagrees with the layout of the stored shape.
    #[error("decode mismatch: layout needs {expected} bytes, payload has {got}")]
    DecodeMismatch {
        /// Bytes implied by the stored shape
        expected: usize,
        /// Bytes actually present
        got: usize,
    },

    /// The operation has no defined mapping for this format.
    ///
    /// Texel access and conversion are only defined for uncompressed formats
    /// with a known channel layout.
    #[error("unsupported pixel format: {format}")]
    UnsupportedFormat {
        /// Format name or description
        format: String,
    },

    /// I/O error during serialization.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidParameters`] error.
    #[inline]
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    ///
    /// # Arguments
    ///
    /// * `what` - Coordinate name
    /// * `value` - Requested value
    /// * `limit` - Exclusive upper bound
    #[inline]
    pub fn out_of_bounds(what: &'static str, value: u32, limit: u32) -> Self {
        Self::OutOfBounds { what, value, limit }
    }

    /// Creates an [`Error::DecodeMismatch`] error.
    #[inline]
    pub fn decode_mismatch(expected: usize, got: usize) -> Self {
        Self::DecodeMismatch { expected, got }
    }

    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }

    /// Returns `true` if this is a parameter validation error.
    #[inline]
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters { .. })
    }

    /// Returns `true` if this is a decode error (length mismatch or I/O).
    #[inline]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::DecodeMismatch { .. } | Self::Io(_))
    }

    /// Returns `true` if this is an unsupported format error.
    #[inline]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
