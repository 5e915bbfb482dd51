// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use crossbeam_channel::Sender;
use tracing::{debug, trace};

use crate::{error::BoxError, observer::Observer, stream::Entry};

/// The push-side endpoint of a result stream.
///
/// Register this with the transport as the callback object of a
/// server-streaming call. Every callback funnels its event into the channel
/// shared with the [`BlockingStream`](crate::BlockingStream); nothing else
/// happens here, so the transport thread is never held up.
///
/// Dropping the sink without a terminal callback disconnects the channel,
/// which the consumer observes as an abandoned stream.
pub struct StreamSink<T> {
	tx: Sender<Entry<T>>,
}

impl<T> StreamSink<T> {
	pub(crate) fn new(tx: Sender<Entry<T>>) -> Self {
		Self {
			tx,
		}
	}
}

impl<T: Send> Observer<T> for StreamSink<T> {
	fn on_next(&self, value: T) {
		// Send only fails when the consumer dropped its half, i.e. it
		// stopped iterating. Nothing left to deliver to.
		if self.tx.send(Entry::Batch(value)).is_err() {
			trace!("consumer gone, dropping batch");
		}
	}

	fn on_error(&self, cause: BoxError) {
		debug!(error = %cause, "stream terminated by producer error");
		let _ = self.tx.send(Entry::Failure(cause));
	}

	fn on_completed(&self) {
		trace!("stream completed by producer");
		let _ = self.tx.send(Entry::Done);
	}
}
