// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use emberdb_type::{Batch, Column, Row};

use crate::{config::StreamOptions, error::Result, stream::BlockingStream};

/// Row-level iteration over a batch stream.
///
/// Drives the underlying [`BlockingStream`] with the configured wait per
/// step and flattens each batch into its rows. A recoverable timeout
/// surfaces as an `Err` item and iteration may continue; a terminal
/// failure is re-raised on every subsequent call. Normal completion ends
/// the iterator.
pub struct Rows {
	stream: BlockingStream<Batch>,
	current: std::vec::IntoIter<Row>,
	columns: Option<Vec<Column>>,
	options: StreamOptions,
}

impl Rows {
	pub fn new(stream: BlockingStream<Batch>, options: StreamOptions) -> Self {
		Self {
			stream,
			current: Vec::new().into_iter(),
			columns: None,
			options,
		}
	}

	/// The schema of the stream, known once the first batch arrived.
	pub fn columns(&self) -> Option<&[Column]> {
		self.columns.as_deref()
	}
}

impl BlockingStream<Batch> {
	/// Consume this stream row by row.
	pub fn rows(self, options: StreamOptions) -> Rows {
		Rows::new(self, options)
	}
}

impl Iterator for Rows {
	type Item = Result<Row>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(row) = self.current.next() {
				return Some(Ok(row));
			}

			match self.stream.has_next(self.options.wait_timeout()) {
				Ok(true) => match self.stream.take_next() {
					Ok(batch) => {
						if self.columns.is_none() {
							self.columns = Some(batch.columns().to_vec());
						}
						self.current = batch.into_rows().into_iter();
					}
					Err(err) => return Some(Err(err)),
				},
				Ok(false) => return None,
				Err(err) => return Some(Err(err)),
			}
		}
	}
}
