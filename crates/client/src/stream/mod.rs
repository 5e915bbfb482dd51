// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

//! The push-to-pull bridge for server-streaming results.
//!
//! A server-streaming call delivers batches through transport callbacks on
//! transport-owned threads; a consumer wants to pull them from a single
//! thread with a bounded wait per step. [`bridge`] creates the two halves:
//! a [`StreamSink`] to register with the transport, and a
//! [`BlockingStream`] the consumer drives.

mod blocking;
mod sink;

pub use blocking::BlockingStream;
pub use sink::StreamSink;

use crate::error::BoxError;

/// What travels through the channel between sink and consumer. At most one
/// terminal entry (`Failure` or `Done`) is ever enqueued, and it is always
/// the last.
pub(crate) enum Entry<T> {
	Batch(T),
	Failure(BoxError),
	Done,
}

/// Create a connected sink/stream pair.
///
/// The channel between them is unbounded, so the sink never blocks the
/// transport thread on insertion, and entries reach the consumer in exact
/// callback order.
pub fn bridge<T>() -> (StreamSink<T>, BlockingStream<T>) {
	let (tx, rx) = crossbeam_channel::unbounded();
	(StreamSink::new(tx), BlockingStream::new(rx))
}
