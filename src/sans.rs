//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as driving the decoder from their own buffers. See
//! [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Once enough bytes are
//! ready, transition to another state by calling the token's `advance` method.
//! This will return a successor state token, along with any extracted data.
//!
//! Definition records are accumulated inside their field tokens and returned
//! whole once the last field entry is read. Data records borrow the stored
//! [`definition::Definition`] for their local message type, and yield one
//! width-specific [`data::Field`] token per field entry.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed.
//!
//! Some areas of the decoding process are not represented in the finite-state
//! machine and must be carefully written:
//!
//! - Reading bytes from the correct place in the document.
//!
//! - Storing definitions by local message type, and looking them up for data
//! records.
//!
//! - Ending decoding once the specified number of document bytes have been
//! read.
//!
//! Implementers are recommended to begin by studying [`crate::avec::decode_next`].

pub mod data;
pub mod definition;
pub mod header;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::DocumentHeader;
