//! Error types for the simulator.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Memory Errors:** Rejected loads, stores and fetches (address outside the image).
//! 2. **Load Errors:** Problems reading a boot image in the `0xADDR: HEXBYTES` format.
//! 3. **Simulator Errors:** Top-level errors surfaced to drivers such as the CLI.
//!
//! Faults raised *inside* a cycle are not Rust errors: the cycle engine folds them
//! into a [`Status`](crate::common::status::Status) so a cycle always completes.

use std::io;

use thiserror::Error;

use super::data::AccessType;

/// A rejected memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The access would touch bytes outside `0..capacity`.
    #[error("{access} of {width} bytes at {addr:#x} is outside memory of {capacity} bytes")]
    OutOfBounds {
        /// Kind of access that was attempted.
        access: AccessType,
        /// First byte address of the access.
        addr: u32,
        /// Access width in bytes.
        width: usize,
        /// Capacity of the memory in bytes.
        capacity: usize,
    },

    /// An instruction fetch from an address that is not a multiple of four.
    #[error("fetch at {addr:#x} is not aligned to the instruction size")]
    Misaligned {
        /// Offending program counter.
        addr: u32,
    },
}

/// Errors produced while loading a boot image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The address on an image line was not followed by a colon.
    #[error("line {line}: expected ':' after address")]
    MissingColon {
        /// One-based line number in the image.
        line: usize,
    },

    /// An image line tried to place a byte past the end of memory.
    #[error("line {line}: invalid address {addr:#x}")]
    AddressOutOfRange {
        /// One-based line number in the image.
        line: usize,
        /// Address of the byte that did not fit.
        addr: usize,
    },

    /// The image did not contain a single byte of code.
    #[error("no lines of code found")]
    Empty,

    /// The image could not be read.
    #[error("failed to read image: {0}")]
    Io(#[from] io::Error),
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// The boot image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration file was malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but describes an impossible machine.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file could not be opened or read.
    #[error("{path}: {source}")]
    Io {
        /// Path that was being accessed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
