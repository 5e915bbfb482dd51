// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use std::{error::Error, fmt, fmt::Display, sync::Arc, time::Duration};

/// The error type the transport reports into the push side of a stream.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, StreamError>;

/// A producer-reported failure, shared so a latched terminal state can
/// surface the same cause on every subsequent call.
///
/// The cause originates in a remote/async context, so no local backtrace
/// is attached; the `source()` chain carries the real origin.
#[derive(Debug, Clone)]
pub struct FailureCause(Arc<dyn Error + Send + Sync + 'static>);

impl FailureCause {
	pub(crate) fn new(cause: BoxError) -> Self {
		Self(Arc::from(cause))
	}

	pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
		&*self.0
	}
}

impl Display for FailureCause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Error for FailureCause {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		self.0.source()
	}
}

/// Everything that can go wrong while consuming a result stream.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StreamError {
	/// No batch arrived within the requested wait window. The stream is
	/// not over: a later wait may still succeed if data arrives.
	#[error("no batch within {waited:?} on the result stream")]
	Timeout {
		waited: Duration,
	},

	/// The producer reported an error. Terminal; re-raised on every
	/// subsequent wait.
	#[error("result stream failed: {cause}")]
	Failed {
		#[source]
		cause: FailureCause,
	},

	/// The producer side went away without completing the stream.
	/// Terminal; re-raised on every subsequent wait.
	#[error("result stream abandoned before completion")]
	Interrupted,

	/// The caller broke the wait/take contract. Programmer error, not a
	/// runtime condition.
	#[error("result stream protocol violation: {reason}")]
	ProtocolViolation {
		reason: &'static str,
	},
}

impl StreamError {
	pub(crate) fn failed(cause: BoxError) -> Self {
		Self::Failed {
			cause: FailureCause::new(cause),
		}
	}

	pub(crate) fn protocol(reason: &'static str) -> Self {
		Self::ProtocolViolation {
			reason,
		}
	}

	/// Whether the stream may still deliver data after this error.
	pub fn is_recoverable(&self) -> bool {
		matches!(self, StreamError::Timeout { .. })
	}
}
