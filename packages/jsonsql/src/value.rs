use crate::Error;

/// A raw column value, as delivered by a driver when scanning or accepted by a driver when binding.
#[derive(Clone, Debug, PartialEq, derive_more::IsVariant)]
pub enum Value {
	Null,
	Integer(i64),
	Real(f64),
	Text(String),
	Blob(Vec<u8>),

	/// An already encoded JSON document.
	Json(Vec<u8>),
}

impl Value {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Integer(_) => "integer",
			Self::Real(_) => "real",
			Self::Text(_) => "text",
			Self::Blob(_) => "blob",
			Self::Json(_) => "json",
		}
	}

	/// Get the document bytes, or `None` if the value is null.
	pub fn document(&self) -> Result<Option<&[u8]>, Error> {
		match self {
			Self::Null => Ok(None),
			Self::Text(text) => Ok(Some(text.as_bytes())),
			Self::Blob(bytes) | Self::Json(bytes) => Ok(Some(bytes)),
			Self::Integer(_) | Self::Real(_) => Err(Error::UnsupportedSourceType {
				type_name: self.type_name(),
			}),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Real(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Self::Blob(value)
	}
}

impl From<&[u8]> for Value {
	fn from(value: &[u8]) -> Self {
		Self::Blob(value.to_owned())
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
