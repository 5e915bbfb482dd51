// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use std::{thread, time::Duration};

use emberdb_client::{Observer, bridge};
use emberdb_type::{Batch, Column, Row, Type, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let (sink, mut stream) = bridge();

	// Stand-in for the transport: deliver two batches, then complete.
	thread::spawn(move || {
		sink.on_next(Batch::new(
			vec![Column::new("id", Type::Int8), Column::new("name", Type::Utf8)],
			vec![
				Row::new(vec![Value::Int8(1), Value::Utf8("alice".into())]),
				Row::new(vec![Value::Int8(2), Value::Utf8("bob".into())]),
			],
		));
		thread::sleep(Duration::from_millis(50));
		sink.on_next(Batch::new(
			vec![Column::new("id", Type::Int8), Column::new("name", Type::Utf8)],
			vec![Row::new(vec![Value::Int8(3), Value::Utf8("carol".into())])],
		));
		sink.on_completed();
	});

	while stream.has_next(Duration::from_secs(1))? {
		let batch = stream.take_next()?;
		println!("batch with {} rows", batch.len());
		for row in batch.rows() {
			println!("  {}", row);
		}
	}
	println!("stream complete");

	Ok(())
}
