// Copyright (c) emberdb.dev 2025
// This file is licensed under the MIT

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A cell value, represented as a native Rust type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// Raw bytes
	Binary(Vec<u8>),
	/// Milliseconds since the Unix epoch
	Timestamp(i64),
}

impl Value {
	/// The declared type of this value, `None` for `Null`.
	pub fn ty(&self) -> Option<Type> {
		match self {
			Value::Null => None,
			Value::Boolean(_) => Some(Type::Boolean),
			Value::Int4(_) => Some(Type::Int4),
			Value::Int8(_) => Some(Type::Int8),
			Value::Uint8(_) => Some(Type::Uint8),
			Value::Float8(_) => Some(Type::Float8),
			Value::Utf8(_) => Some(Type::Utf8),
			Value::Binary(_) => Some(Type::Binary),
			Value::Timestamp(_) => Some(Type::Timestamp),
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Boolean(v) => write!(f, "{}", v),
			Value::Int4(v) => write!(f, "{}", v),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Uint8(v) => write!(f, "{}", v),
			Value::Float8(v) => write!(f, "{}", v),
			Value::Utf8(v) => f.write_str(v),
			Value::Binary(v) => {
				f.write_str("0x")?;
				for byte in v {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
			Value::Timestamp(v) => write!(f, "{}", v),
		}
	}
}

/// The type of a streamed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
	Boolean,
	Int4,
	Int8,
	Uint8,
	Float8,
	Utf8,
	Binary,
	Timestamp,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("boolean"),
			Type::Int4 => f.write_str("int4"),
			Type::Int8 => f.write_str("int8"),
			Type::Uint8 => f.write_str("uint8"),
			Type::Float8 => f.write_str("float8"),
			Type::Utf8 => f.write_str("utf8"),
			Type::Binary => f.write_str("binary"),
			Type::Timestamp => f.write_str("timestamp"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::Null.to_string(), "null");
		assert_eq!(Value::Boolean(true).to_string(), "true");
		assert_eq!(Value::Int8(-42).to_string(), "-42");
		assert_eq!(Value::Utf8("hello".into()).to_string(), "hello");
		assert_eq!(Value::Binary(vec![0xde, 0xad]).to_string(), "0xdead");
		assert_eq!(Value::Timestamp(1700000000000).to_string(), "1700000000000");
	}

	#[test]
	fn test_ty() {
		assert_eq!(Value::Null.ty(), None);
		assert_eq!(Value::Float8(1.5).ty(), Some(Type::Float8));
		assert_eq!(Value::Utf8("x".into()).ty(), Some(Type::Utf8));
	}

	#[test]
	fn test_serde_round_trip() {
		let value = Value::Utf8("hello".into());
		let json = serde_json::to_string(&value).unwrap();
		let parsed: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, value);
	}
}
