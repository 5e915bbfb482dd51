// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use tracing::{trace, warn};

use crate::{
	error::{Result, StreamError},
	stream::Entry,
};

enum State {
	/// More entries may arrive.
	Live,
	/// The producer completed normally; no further channel fetch happens.
	Exhausted,
	/// A terminal failure was observed; re-raised on every later wait.
	Failed(StreamError),
}

/// The pull-side of a result stream, driven by exactly one consumer thread.
///
/// The protocol is wait-then-take: [`has_next`](Self::has_next) blocks for
/// at most the given timeout and stages the next batch on success;
/// [`take_next`](Self::take_next) moves the staged batch out without
/// blocking. All waiting, timeout and failure handling lives in `has_next`,
/// which keeps the take call trivial on the happy path.
pub struct BlockingStream<T> {
	rx: Receiver<Entry<T>>,
	pending: Option<T>,
	state: State,
}

impl<T> BlockingStream<T> {
	pub(crate) fn new(rx: Receiver<Entry<T>>) -> Self {
		Self {
			rx,
			pending: None,
			state: State::Live,
		}
	}

	/// Wait up to `timeout` for the stream to yield its next batch.
	///
	/// Returns `Ok(true)` with a batch staged for [`take_next`](Self::take_next),
	/// or `Ok(false)` once the producer has completed — and forever after.
	///
	/// A [`StreamError::Timeout`] does not end the stream: the producer may
	/// simply not have delivered yet, and a later call with a fresh timeout
	/// can still succeed. Every other error is terminal and is re-raised on
	/// each subsequent call.
	pub fn has_next(&mut self, timeout: Duration) -> Result<bool> {
		match &self.state {
			State::Live => {}
			State::Exhausted => return Ok(false),
			State::Failed(err) => return Err(err.clone()),
		}

		// A batch staged by a previous wait is still the answer.
		if self.pending.is_some() {
			return Ok(true);
		}

		match self.rx.recv_timeout(timeout) {
			Ok(Entry::Batch(batch)) => {
				trace!("batch staged for consumption");
				self.pending = Some(batch);
				Ok(true)
			}
			Ok(Entry::Failure(cause)) => {
				let err = StreamError::failed(cause);
				warn!(error = %err, "result stream failed");
				self.state = State::Failed(err.clone());
				Err(err)
			}
			Ok(Entry::Done) => {
				trace!("result stream exhausted");
				self.state = State::Exhausted;
				Ok(false)
			}
			Err(RecvTimeoutError::Timeout) => {
				trace!(?timeout, "no batch within wait window");
				Err(StreamError::Timeout {
					waited: timeout,
				})
			}
			Err(RecvTimeoutError::Disconnected) => {
				warn!("producer dropped without completing the stream");
				self.state = State::Failed(StreamError::Interrupted);
				Err(StreamError::Interrupted)
			}
		}
	}

	/// Move the batch staged by the last successful [`has_next`](Self::has_next)
	/// out of the stream. Never blocks.
	///
	/// Calling this without a staged batch — before any successful wait,
	/// twice in a row, or after the stream ended — is a
	/// [`StreamError::ProtocolViolation`].
	pub fn take_next(&mut self) -> Result<T> {
		match &self.state {
			State::Live => {}
			State::Exhausted | State::Failed(_) => {
				return Err(StreamError::protocol("take_next after the stream ended"));
			}
		}

		self.pending
			.take()
			.ok_or_else(|| StreamError::protocol("take_next without a successful has_next"))
	}
}

#[cfg(test)]
mod tests {
	use std::{thread, time::Instant};

	use super::*;
	use crate::{observer::Observer, stream::bridge};

	fn boom() -> crate::error::BoxError {
		Box::new(std::io::Error::other("boom"))
	}

	#[test]
	fn test_batches_then_completion() {
		let (sink, mut stream) = bridge();
		sink.on_next(vec!["a"]);
		sink.on_next(vec!["b"]);
		sink.on_completed();

		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		assert_eq!(stream.take_next().unwrap(), vec!["a"]);
		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		assert_eq!(stream.take_next().unwrap(), vec!["b"]);
		assert!(!stream.has_next(Duration::from_secs(1)).unwrap());

		// Exhaustion is permanent and needs no further channel fetch.
		assert!(!stream.has_next(Duration::from_secs(1)).unwrap());
	}

	#[test]
	fn test_error_before_any_batch() {
		let (sink, mut stream) = bridge::<Vec<&str>>();
		sink.on_error(boom());

		let err = stream.has_next(Duration::from_secs(1)).unwrap_err();
		assert!(matches!(err, StreamError::Failed { .. }));
		assert!(err.to_string().contains("boom"));
	}

	#[test]
	fn test_error_after_batches() {
		let (sink, mut stream) = bridge();
		sink.on_next(vec!["a"]);
		sink.on_error(boom());

		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		assert_eq!(stream.take_next().unwrap(), vec!["a"]);

		let err = stream.has_next(Duration::from_secs(1)).unwrap_err();
		assert!(matches!(err, StreamError::Failed { .. }));

		// The recorded failure is re-raised, not re-fetched.
		let again = stream.has_next(Duration::from_secs(1)).unwrap_err();
		assert!(again.to_string().contains("boom"));
	}

	#[test]
	fn test_timeout_is_retryable() {
		let (sink, mut stream) = bridge();

		let start = Instant::now();
		let err = stream.has_next(Duration::from_millis(50)).unwrap_err();
		assert!(matches!(err, StreamError::Timeout { .. }));
		assert!(start.elapsed() >= Duration::from_millis(50));

		// Data arriving later is still delivered.
		sink.on_next(vec!["late"]);
		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		assert_eq!(stream.take_next().unwrap(), vec!["late"]);
	}

	#[test]
	fn test_take_next_without_has_next() {
		let (_sink, mut stream) = bridge::<Vec<&str>>();
		let err = stream.take_next().unwrap_err();
		assert!(matches!(err, StreamError::ProtocolViolation { .. }));
	}

	#[test]
	fn test_take_next_twice() {
		let (sink, mut stream) = bridge();
		sink.on_next(vec!["a"]);

		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		stream.take_next().unwrap();

		let err = stream.take_next().unwrap_err();
		assert!(matches!(err, StreamError::ProtocolViolation { .. }));
	}

	#[test]
	fn test_take_next_after_completion() {
		let (sink, mut stream) = bridge::<Vec<&str>>();
		sink.on_completed();

		assert!(!stream.has_next(Duration::from_secs(1)).unwrap());
		let err = stream.take_next().unwrap_err();
		assert!(matches!(err, StreamError::ProtocolViolation { .. }));
	}

	#[test]
	fn test_repeated_has_next_keeps_staged_batch() {
		let (sink, mut stream) = bridge();
		sink.on_next(vec!["a"]);
		sink.on_next(vec!["b"]);

		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		assert!(stream.has_next(Duration::from_secs(1)).unwrap());
		assert_eq!(stream.take_next().unwrap(), vec!["a"]);
	}

	#[test]
	fn test_producer_drop_interrupts() {
		let (sink, mut stream) = bridge::<Vec<&str>>();
		drop(sink);

		let err = stream.has_next(Duration::from_secs(1)).unwrap_err();
		assert!(matches!(err, StreamError::Interrupted));

		// Abandonment is latched.
		let again = stream.has_next(Duration::from_secs(1)).unwrap_err();
		assert!(matches!(again, StreamError::Interrupted));
	}

	#[test]
	fn test_threaded_producer_preserves_order() {
		let (sink, mut stream) = bridge();

		let producer = thread::spawn(move || {
			for i in 0..100u64 {
				sink.on_next(vec![i]);
			}
			sink.on_completed();
		});

		let mut seen = Vec::new();
		while stream.has_next(Duration::from_secs(5)).unwrap() {
			seen.extend(stream.take_next().unwrap());
		}
		producer.join().unwrap();

		assert_eq!(seen, (0..100).collect::<Vec<u64>>());
	}
}
