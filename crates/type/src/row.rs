// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{Type, Value};

/// A column of the streamed result schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub ty: Type,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

/// One record of a streamed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
	values: Vec<Value>,
}

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	/// The value at the given column position.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn into_values(self) -> Vec<Value> {
		self.values
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for (i, value) in self.values.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", value)?;
		}
		Ok(())
	}
}

/// One delivered group of records from a single push event.
///
/// Ordered and immutable once constructed; the stream machinery consumes
/// batches whole and never mutates them. An empty batch is a legitimate
/// delivery and does not signal completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
	columns: Vec<Column>,
	rows: Vec<Row>,
}

impl Batch {
	pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
		Self {
			columns,
			rows,
		}
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// The position of the named column, if present.
	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name == name)
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn into_rows(self) -> Vec<Row> {
		self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}
