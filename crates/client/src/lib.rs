// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

//! Streaming core of the EmberDB Rust client.
//!
//! A server-streaming query delivers row batches through push callbacks on
//! transport-owned threads. This crate bridges that onto a pull contract a
//! single consumer thread can drive with a bounded wait per step:
//!
//! ```
//! use std::time::Duration;
//!
//! use emberdb_client::{Observer, bridge};
//! use emberdb_type::{Batch, Column, Row, Type, Value};
//!
//! let (sink, mut stream) = bridge();
//!
//! // The transport side: register `sink` with a server-streaming call.
//! sink.on_next(Batch::new(
//! 	vec![Column::new("id", Type::Int8)],
//! 	vec![Row::new(vec![Value::Int8(1)])],
//! ));
//! sink.on_completed();
//!
//! // The consumer side: pull with a bounded wait per step.
//! while stream.has_next(Duration::from_secs(1))? {
//! 	let batch = stream.take_next()?;
//! 	for row in batch.rows() {
//! 		println!("{}", row);
//! 	}
//! }
//! # Ok::<(), emberdb_client::StreamError>(())
//! ```
//!
//! The transport itself — connection lifecycle, TLS, load balancing — is
//! not part of this crate; it only needs to drive an [`Observer`].

mod config;
mod error;
mod observer;
mod rows;
mod stream;

pub use config::StreamOptions;
// Re-export the domain types a stream delivers
pub use emberdb_type::{Batch, Column, Row, Type, Value};
pub use error::{BoxError, FailureCause, Result, StreamError};
pub use observer::Observer;
pub use rows::Rows;
pub use stream::{BlockingStream, StreamSink, bridge};
