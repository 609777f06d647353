use {
	crate::{Decode, Encode, Error, Value, null::is_null_literal},
	std::ops::Deref,
};


/// A JSON document stored in a column declared `NOT NULL`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
	#[must_use]
	pub fn new(value: T) -> Self {
		Self(value)
	}

	#[must_use]
	pub fn get(&self) -> &T {
		&self.0
	}

	#[must_use]
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> Deref for Json<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> From<T> for Json<T> {
	fn from(value: T) -> Self {
		Self(value)
	}
}

impl<T> Json<T>
where
	T: serde::de::DeserializeOwned,
{
	/// Build a box straight from a column value. Unlike [`Decode::from_value`], this does not need `T: Default`.
	pub fn try_from_value(value: &Value) -> Result<Self, Error> {
		let bytes = value.document()?.ok_or(Error::NullNotAllowed)?;
		if is_null_literal(bytes) {
			return Err(Error::NullNotAllowed);
		}
		let value = serde_json::from_slice(bytes).map_err(|source| Error::DecodeFailed { source })?;
		Ok(Self(value))
	}
}

impl<T> Decode for Json<T>
where
	T: serde::de::DeserializeOwned,
{
	/// Decode the column value. Both an absent value and the `null` literal fail with [`Error::NullNotAllowed`].
	fn decode(&mut self, value: &Value) -> Result<(), Error> {
		*self = Self::try_from_value(value)?;
		Ok(())
	}
}

impl<T> Encode for Json<T>
where
	T: serde::Serialize,
{
	fn encode(&self) -> Result<Value, Error> {
		let bytes = serde_json::to_vec(&self.0).map_err(|source| Error::EncodeFailed { source })?;
		Ok(Value::Json(bytes))
	}
}
