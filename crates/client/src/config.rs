// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use std::time::Duration;

/// Options for consuming a result stream.
#[derive(Debug, Clone)]
pub struct StreamOptions {
	wait_timeout: Duration,
}

impl StreamOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the maximum wait per iteration step.
	pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
		self.wait_timeout = timeout;
		self
	}

	/// The maximum wait per iteration step.
	pub fn wait_timeout(&self) -> Duration {
		self.wait_timeout
	}
}

impl Default for StreamOptions {
	fn default() -> Self {
		Self {
			wait_timeout: Duration::from_secs(10),
		}
	}
}
