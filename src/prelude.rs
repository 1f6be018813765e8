//! # binscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the binscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all binscope operations
pub use crate::Error;

/// The result type used throughout binscope
pub use crate::Result;

// ================================================================================================
// Stream Adapter
// ================================================================================================

/// Typed reader and writer, and its initial settings
pub use crate::{Stream, StreamConfig};

// ================================================================================================
// Codec
// ================================================================================================

/// Primitive table, byte order and dynamic values
pub use crate::{Endian, Kind, Primitive, Value};

/// Text encodings and decode error policies
pub use crate::{ErrorPolicy, TextEncoding};

/// Statically typed conversions
pub use crate::codec::io::CodecIO;

// ================================================================================================
// Stores
// ================================================================================================

/// Store capability trait and implementations
pub use crate::{Capabilities, Memory, Mode, Physical, Store, Wrapper};
