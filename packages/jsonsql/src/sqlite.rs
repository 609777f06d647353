use {
	crate::{Decode, Encode, Json, Nullable, Value},
	rusqlite as sqlite,
};


impl sqlite::types::ToSql for Value {
	fn to_sql(&self) -> sqlite::Result<sqlite::types::ToSqlOutput<'_>> {
		match self {
			Value::Null => Ok(sqlite::types::ToSqlOutput::Borrowed(
				sqlite::types::ValueRef::Null,
			)),
			Value::Integer(value) => Ok(sqlite::types::ToSqlOutput::Borrowed(
				sqlite::types::ValueRef::Integer(*value),
			)),
			Value::Real(value) => Ok(sqlite::types::ToSqlOutput::Borrowed(
				sqlite::types::ValueRef::Real(*value),
			)),
			Value::Text(value) => Ok(sqlite::types::ToSqlOutput::Borrowed(
				sqlite::types::ValueRef::Text(value.as_bytes()),
			)),
			Value::Blob(value) => Ok(sqlite::types::ToSqlOutput::Borrowed(
				sqlite::types::ValueRef::Blob(value.as_ref()),
			)),
			Value::Json(value) => Ok(sqlite::types::ToSqlOutput::Borrowed(
				sqlite::types::ValueRef::Text(value.as_ref()),
			)),
		}
	}
}

impl sqlite::types::FromSql for Value {
	fn column_result(value: sqlite::types::ValueRef<'_>) -> sqlite::types::FromSqlResult<Self> {
		Ok(value.into())
	}
}

impl<'a> From<sqlite::types::ValueRef<'a>> for Value {
	fn from(value: sqlite::types::ValueRef<'a>) -> Self {
		match value {
			sqlite::types::ValueRef::Null => Self::Null,
			sqlite::types::ValueRef::Integer(value) => Self::Integer(value),
			sqlite::types::ValueRef::Real(value) => Self::Real(value),
			sqlite::types::ValueRef::Text(value) => match String::from_utf8(value.to_owned()) {
				Ok(value) => Self::Text(value),
				Err(error) => Self::Blob(error.into_bytes()),
			},
			sqlite::types::ValueRef::Blob(value) => Self::Blob(value.to_owned()),
		}
	}
}

impl<T> sqlite::types::ToSql for Json<T>
where
	T: serde::Serialize,
{
	fn to_sql(&self) -> sqlite::Result<sqlite::types::ToSqlOutput<'_>> {
		let value = self
			.encode()
			.map_err(|error| sqlite::Error::ToSqlConversionFailure(error.into()))?;
		to_sql_output(value)
	}
}

impl<T> sqlite::types::FromSql for Json<T>
where
	T: serde::de::DeserializeOwned,
{
	fn column_result(value: sqlite::types::ValueRef<'_>) -> sqlite::types::FromSqlResult<Self> {
		Self::try_from_value(&Value::from(value))
			.map_err(|error| sqlite::types::FromSqlError::Other(error.into()))
	}
}

impl<T> sqlite::types::ToSql for Nullable<T>
where
	T: serde::Serialize,
{
	fn to_sql(&self) -> sqlite::Result<sqlite::types::ToSqlOutput<'_>> {
		let value = self
			.encode()
			.map_err(|error| sqlite::Error::ToSqlConversionFailure(error.into()))?;
		to_sql_output(value)
	}
}

impl<T> sqlite::types::FromSql for Nullable<T>
where
	T: Default + serde::de::DeserializeOwned,
{
	fn column_result(value: sqlite::types::ValueRef<'_>) -> sqlite::types::FromSqlResult<Self> {
		Self::from_value(&Value::from(value))
			.map_err(|error| sqlite::types::FromSqlError::Other(error.into()))
	}
}

fn to_sql_output(value: Value) -> sqlite::Result<sqlite::types::ToSqlOutput<'static>> {
	let value = match value {
		Value::Null => sqlite::types::Value::Null,
		Value::Integer(value) => sqlite::types::Value::Integer(value),
		Value::Real(value) => sqlite::types::Value::Real(value),
		Value::Text(value) => sqlite::types::Value::Text(value),
		Value::Blob(value) => sqlite::types::Value::Blob(value),
		Value::Json(value) => sqlite::types::Value::Text(
			String::from_utf8(value)
				.map_err(|error| sqlite::Error::ToSqlConversionFailure(error.into()))?,
		),
	};
	Ok(sqlite::types::ToSqlOutput::Owned(value))
}
