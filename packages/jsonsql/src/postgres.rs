use {
	crate::{Decode as _, Encode as _, Json, Nullable, Value},
	bytes::BufMut as _,
	tokio_postgres::{
		self as postgres,
		types::{FromSql as _, ToSql as _},
	},
};


/// The version of the binary `jsonb` format.
const JSONB_VERSION: u8 = 1;

impl postgres::types::ToSql for Value {
	fn to_sql(
		&self,
		ty: &postgres::types::Type,
		out: &mut bytes::BytesMut,
	) -> Result<postgres::types::IsNull, Box<dyn std::error::Error + Sync + Send>>
	where
		Self: Sized,
	{
		let document = match self {
			Value::Null => return Ok(postgres::types::IsNull::Yes),
			Value::Integer(value) if *ty == postgres::types::Type::INT8 => {
				return value.to_sql(ty, out);
			},
			Value::Real(value) if *ty == postgres::types::Type::FLOAT8 => {
				return value.to_sql(ty, out);
			},
			Value::Integer(_) | Value::Real(_) => {
				return Err(mismatch(self, ty));
			},
			Value::Text(value) => value.as_bytes(),
			Value::Blob(value) | Value::Json(value) => value.as_slice(),
		};
		match *ty {
			postgres::types::Type::JSONB => {
				out.put_u8(JSONB_VERSION);
				out.put_slice(document);
			},
			postgres::types::Type::JSON | postgres::types::Type::BYTEA => {
				out.put_slice(document);
			},
			postgres::types::Type::TEXT | postgres::types::Type::VARCHAR => {
				std::str::from_utf8(document)?;
				out.put_slice(document);
			},
			_ => return Err(mismatch(self, ty)),
		}
		Ok(postgres::types::IsNull::No)
	}

	postgres::types::accepts!(INT8, FLOAT8, TEXT, VARCHAR, BYTEA, JSON, JSONB);

	postgres::types::to_sql_checked!();
}

impl<'a> postgres::types::FromSql<'a> for Value {
	fn from_sql(
		ty: &postgres::types::Type,
		raw: &'a [u8],
	) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
		match *ty {
			postgres::types::Type::BOOL => Ok(Self::Integer(bool::from_sql(ty, raw)?.into())),
			postgres::types::Type::INT2 => Ok(Self::Integer(i16::from_sql(ty, raw)?.into())),
			postgres::types::Type::INT4 => Ok(Self::Integer(i32::from_sql(ty, raw)?.into())),
			postgres::types::Type::INT8 => Ok(Self::Integer(i64::from_sql(ty, raw)?)),
			postgres::types::Type::FLOAT4 => Ok(Self::Real(f32::from_sql(ty, raw)?.into())),
			postgres::types::Type::FLOAT8 => Ok(Self::Real(f64::from_sql(ty, raw)?)),
			postgres::types::Type::TEXT
			| postgres::types::Type::VARCHAR
			| postgres::types::Type::BPCHAR
			| postgres::types::Type::NAME => Ok(Self::Text(String::from_sql(ty, raw)?)),
			postgres::types::Type::BYTEA => Ok(Self::Blob(<Vec<u8>>::from_sql(ty, raw)?)),
			postgres::types::Type::JSON => Ok(Self::Json(raw.to_owned())),
			postgres::types::Type::JSONB => match raw {
				[JSONB_VERSION, json @ ..] => Ok(Self::Json(json.to_owned())),
				[] => Ok(Self::Json(Vec::new())),
				[version, ..] => Err(format!("unsupported jsonb version {version}").into()),
			},
			_ => Err(format!("invalid type {ty}").into()),
		}
	}

	fn from_sql_null(
		_: &postgres::types::Type,
	) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
		Ok(Self::Null)
	}

	postgres::types::accepts!(
		BOOL, INT2, INT4, INT8, FLOAT4, FLOAT8, TEXT, VARCHAR, BPCHAR, NAME, BYTEA, JSON, JSONB
	);
}

impl<T> postgres::types::ToSql for Json<T>
where
	T: std::fmt::Debug + serde::Serialize,
{
	fn to_sql(
		&self,
		ty: &postgres::types::Type,
		out: &mut bytes::BytesMut,
	) -> Result<postgres::types::IsNull, Box<dyn std::error::Error + Sync + Send>>
	where
		Self: Sized,
	{
		self.encode()?.to_sql(ty, out)
	}

	postgres::types::accepts!(TEXT, VARCHAR, BYTEA, JSON, JSONB);

	postgres::types::to_sql_checked!();
}

impl<'a, T> postgres::types::FromSql<'a> for Json<T>
where
	T: serde::de::DeserializeOwned,
{
	fn from_sql(
		ty: &postgres::types::Type,
		raw: &'a [u8],
	) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
		let value = Value::from_sql(ty, raw)?;
		let json = Self::try_from_value(&value)?;
		Ok(json)
	}

	fn from_sql_null(
		_: &postgres::types::Type,
	) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
		let json = Self::try_from_value(&Value::Null)?;
		Ok(json)
	}

	postgres::types::accepts!(TEXT, VARCHAR, BYTEA, JSON, JSONB);
}

impl<T> postgres::types::ToSql for Nullable<T>
where
	T: std::fmt::Debug + serde::Serialize,
{
	fn to_sql(
		&self,
		ty: &postgres::types::Type,
		out: &mut bytes::BytesMut,
	) -> Result<postgres::types::IsNull, Box<dyn std::error::Error + Sync + Send>>
	where
		Self: Sized,
	{
		let value = self.encode()?;
		if value.is_null() {
			tracing::trace!(%ty, "binding a null value");
		}
		value.to_sql(ty, out)
	}

	postgres::types::accepts!(TEXT, VARCHAR, BYTEA, JSON, JSONB);

	postgres::types::to_sql_checked!();
}

impl<'a, T> postgres::types::FromSql<'a> for Nullable<T>
where
	T: Default + serde::de::DeserializeOwned,
{
	fn from_sql(
		ty: &postgres::types::Type,
		raw: &'a [u8],
	) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
		let value = Value::from_sql(ty, raw)?;
		let nullable = Self::from_value(&value)?;
		Ok(nullable)
	}

	fn from_sql_null(
		_: &postgres::types::Type,
	) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
		let nullable = Self::from_value(&Value::Null)?;
		Ok(nullable)
	}

	postgres::types::accepts!(TEXT, VARCHAR, BYTEA, JSON, JSONB);
}

fn mismatch(
	value: &Value,
	ty: &postgres::types::Type,
) -> Box<dyn std::error::Error + Sync + Send> {
	format!("cannot bind {} to type {ty}", value.type_name()).into()
}
