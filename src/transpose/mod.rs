//! Transposition, chunking and reductions over nested values.
//!
//! Everything here is built on the broadcasting and traversal primitives;
//! `expand` combines them into the multichannel expansion used when
//! preparing structured specs for outbound messages.

pub mod chunk;
pub mod expand;
pub mod flop;
pub mod reduce;
