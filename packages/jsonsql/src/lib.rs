pub use self::{json::Json, nullable::Nullable, value::Value};

pub mod json;
pub mod null;
pub mod nullable;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod value;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
	#[display("null value not allowed for a not null column")]
	NullNotAllowed,

	#[display("unsupported source type {type_name}")]
	UnsupportedSourceType { type_name: &'static str },

	#[display("failed to decode the value")]
	DecodeFailed { source: serde_json::Error },

	#[display("failed to encode the value")]
	EncodeFailed { source: serde_json::Error },
}

/// Scan a column value into a destination.
pub trait Decode {
	fn decode(&mut self, value: &Value) -> Result<(), Error>;

	fn from_value(value: &Value) -> Result<Self, Error>
	where
		Self: Default + Sized,
	{
		let mut this = Self::default();
		this.decode(value)?;
		Ok(this)
	}
}

/// Convert a destination into a value that can be bound as a parameter.
pub trait Encode {
	fn encode(&self) -> Result<Value, Error>;
}

const _: () = {
	const fn assert<T: Decode + Encode>() {}
	assert::<Json<()>>();
	assert::<Nullable<()>>();
};
