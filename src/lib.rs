#![no_std]

//! A streaming record decoder for Garmin's Flexible and Interoperable Data
//! Transfer protocol.
//!
//! Cassette reads a document header, then decodes the interleaved definition
//! and data records that follow it, one record at a time. Each decode keeps its
//! own table of local message definitions, and data records are returned as
//! numbered field values with names resolved through a replaceable catalog.
//!
//! Most users should begin with the functions in the [`avec`] module. If these
//! prove insufficient, consider driving the finite-state machine in the
//! [`sans`] module directly.
//!
//! Supported documents use little-endian definitions with fields one, two, or
//! four bytes wide, and normal (not compressed timestamp) record headers. The
//! trailing check value is not validated.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod catalog;
pub mod sans;
