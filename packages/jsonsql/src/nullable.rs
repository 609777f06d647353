use crate::{Decode, Encode, Error, Json, Value, null::is_null_literal};

#[cfg(test)]
mod tests;

/// A JSON document stored in a column that may be `NULL`.
///
/// A `NULL` column, an empty value, and the `null` literal all decode to an invalid box whose value is reset to `T::default()`. An invalid box encodes to [`Value::Null`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
	value: T,
	valid: bool,
}

impl<T> Nullable<T> {
	#[must_use]
	pub fn with_value(value: T) -> Self {
		Self { value, valid: true }
	}

	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.valid
	}

	#[must_use]
	pub fn get(&self) -> (&T, bool) {
		(&self.value, self.valid)
	}

	/// Borrow the value if the box is valid.
	#[must_use]
	pub fn as_option(&self) -> Option<&T> {
		self.valid.then_some(&self.value)
	}

	#[must_use]
	pub fn into_option(self) -> Option<T> {
		self.valid.then_some(self.value)
	}
}

impl<T> Nullable<T>
where
	T: Default,
{
	#[must_use]
	pub fn new(value: T, valid: bool) -> Self {
		if valid {
			Self::with_value(value)
		} else {
			Self::null()
		}
	}

	#[must_use]
	pub fn null() -> Self {
		Self {
			value: T::default(),
			valid: false,
		}
	}

	#[must_use]
	pub fn from_option(value: Option<&T>) -> Self
	where
		T: Clone,
	{
		match value {
			Some(value) => Self::with_value(value.clone()),
			None => Self::null(),
		}
	}

	fn reset(&mut self) {
		self.value = T::default();
		self.valid = false;
	}
}

impl<T> From<Option<T>> for Nullable<T>
where
	T: Default,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::with_value(value),
			None => Self::null(),
		}
	}
}

impl<T> From<Json<T>> for Nullable<T> {
	fn from(value: Json<T>) -> Self {
		Self::with_value(value.0)
	}
}

impl<T> Decode for Nullable<T>
where
	T: Default + serde::de::DeserializeOwned,
{
	fn decode(&mut self, value: &Value) -> Result<(), Error> {
		let bytes = match value.document()? {
			Some(bytes) if !bytes.is_empty() && !is_null_literal(bytes) => bytes,
			_ => {
				tracing::trace!(type_name = value.type_name(), "decoded a null value");
				self.reset();
				return Ok(());
			},
		};
		self.value =
			serde_json::from_slice(bytes).map_err(|source| Error::DecodeFailed { source })?;
		self.valid = true;
		Ok(())
	}
}

impl<T> Encode for Nullable<T>
where
	T: serde::Serialize,
{
	fn encode(&self) -> Result<Value, Error> {
		if !self.valid {
			return Ok(Value::Null);
		}
		let bytes =
			serde_json::to_vec(&self.value).map_err(|source| Error::EncodeFailed { source })?;
		Ok(Value::Json(bytes))
	}
}
