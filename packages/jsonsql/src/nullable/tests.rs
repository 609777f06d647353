use {
	crate::{Decode as _, Encode as _, Error, Json, Nullable, Value},
	pretty_assertions::assert_eq,
	std::collections::BTreeMap,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
struct Profile {
	name: String,
	email: String,
}

#[derive(Debug, Default)]
struct Unserializable;

impl serde::Serialize for Unserializable {
	fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		Err(serde::ser::Error::custom("cannot be serialized"))
	}
}

fn alice() -> Profile {
	Profile {
		name: "Alice".to_owned(),
		email: "alice@example.com".to_owned(),
	}
}

#[test]
fn decode_struct() {
	let mut nullable = Nullable::<Profile>::default();
	nullable
		.decode(&Value::from(
			br#"{"name":"Alice","email":"alice@example.com"}"#.as_slice(),
		))
		.unwrap();
	assert!(nullable.is_valid());
	assert_eq!(nullable.as_option(), Some(&alice()));
}

#[test]
fn decode_string() {
	let nullable = Nullable::<String>::from_value(&Value::from(r#""hello""#)).unwrap();
	assert_eq!(nullable.get(), (&"hello".to_owned(), true));
}

#[test]
fn decode_json() {
	let nullable =
		Nullable::<BTreeMap<String, i32>>::from_value(&Value::Json(br#"{"test":123}"#.to_vec()))
			.unwrap();
	assert_eq!(
		nullable.into_option(),
		Some(BTreeMap::from([("test".to_owned(), 123)]))
	);
}

#[test]
fn decode_null() {
	let values = [
		Value::Null,
		Value::Blob(Vec::new()),
		Value::Text(String::new()),
		Value::Json(Vec::new()),
		Value::from(b"null".as_slice()),
		Value::from("null"),
		Value::Json(b"null".to_vec()),
		Value::from(" null"),
		Value::from("null "),
		Value::from(" null "),
		Value::from("\nnull\n"),
		Value::from("\t null \r\n"),
	];
	for value in values {
		let mut nullable = Nullable::with_value(alice());
		nullable.decode(&value).unwrap();
		assert!(!nullable.is_valid(), "{value:?}");
		assert_eq!(nullable.get(), (&Profile::default(), false), "{value:?}");
		assert_eq!(nullable.as_option(), None);
	}
}

#[test]
fn decode_unsupported_type() {
	let mut nullable = Nullable::with_value(alice());
	let error = nullable.decode(&Value::Real(1.5)).unwrap_err();
	assert!(matches!(
		error,
		Error::UnsupportedSourceType { type_name: "real" }
	));
	assert_eq!(nullable, Nullable::with_value(alice()));
}

#[test]
fn decode_invalid() {
	let mut nullable = Nullable::<Profile>::default();
	let error = nullable
		.decode(&Value::from(b"{invalid json}".as_slice()))
		.unwrap_err();
	assert!(matches!(error, Error::DecodeFailed { .. }));
	insta::assert_snapshot!(error, @"failed to decode the value");
}

#[test]
fn decode_invalid_keeps_value() {
	let mut nullable = Nullable::with_value(alice());
	let error = nullable
		.decode(&Value::from("{invalid json}"))
		.unwrap_err();
	assert!(matches!(error, Error::DecodeFailed { .. }));
	assert!(nullable.is_valid());
	assert_eq!(nullable.as_option(), Some(&alice()));
}

#[test]
fn decode_after_null() {
	let mut nullable = Nullable::<Profile>::null();
	nullable
		.decode(&Value::from(r#"{"name":"Bob","email":"bob@example.com"}"#))
		.unwrap();
	assert!(nullable.is_valid());
	assert_eq!(nullable.get().0.name, "Bob");
	nullable.decode(&Value::Null).unwrap();
	assert_eq!(nullable, Nullable::null());
}

#[test]
fn decode_slice() {
	let nullable = Nullable::<Vec<i32>>::from_value(&Value::from("[1, 2, 3, 4, 5]")).unwrap();
	assert_eq!(nullable.as_option(), Some(&vec![1, 2, 3, 4, 5]));
}

#[test]
fn decode_slice_of_structs() {
	let nullable = Nullable::<Vec<Profile>>::from_value(&Value::from(
		r#"[{"name":"Alice","email":"alice@example.com"},{"name":"Bob","email":"bob@example.com"}]"#,
	))
	.unwrap();
	let profiles = nullable.as_option().unwrap();
	assert_eq!(profiles.len(), 2);
	assert_eq!(profiles[0], alice());
	assert_eq!(profiles[1].name, "Bob");
}

#[test]
fn decode_empty_slice() {
	let nullable = Nullable::<Vec<i32>>::from_value(&Value::from(b"[]".as_slice())).unwrap();
	assert!(nullable.is_valid());
	assert_eq!(nullable.as_option().map(Vec::len), Some(0));
}

#[test]
fn encode_valid() {
	let nullable = Nullable::with_value(Profile {
		name: "Bob".to_owned(),
		email: "bob@example.com".to_owned(),
	});
	let value = nullable.encode().unwrap();
	assert_eq!(
		value,
		Value::Json(br#"{"name":"Bob","email":"bob@example.com"}"#.to_vec())
	);
}

#[test]
fn encode_null() {
	let nullable = Nullable::<Profile>::null();
	assert_eq!(nullable.encode().unwrap(), Value::Null);
	let nullable = Nullable::<Unserializable>::null();
	assert_eq!(nullable.encode().unwrap(), Value::Null);
}

#[test]
fn encode_unserializable() {
	let nullable = Nullable::with_value(Unserializable);
	let error = nullable.encode().unwrap_err();
	assert!(matches!(error, Error::EncodeFailed { .. }));
}

#[test]
fn default_is_null() {
	let nullable = Nullable::<Profile>::default();
	assert_eq!(nullable, Nullable::null());
	assert_eq!(nullable.encode().unwrap(), Value::Null);
}

#[test]
fn round_trip() {
	let original = Nullable::with_value(vec![alice()]);
	let value = original.encode().unwrap();
	let restored = Nullable::<Vec<Profile>>::from_value(&value).unwrap();
	assert_eq!(restored, original);
}

#[test]
fn round_trip_null() {
	let mut restored = Nullable::with_value(vec![alice()]);
	let value = Nullable::<Vec<Profile>>::null().encode().unwrap();
	restored.decode(&value).unwrap();
	assert!(!restored.is_valid());
	assert_eq!(restored.get(), (&Vec::new(), false));
}

#[test]
fn new() {
	assert_eq!(Nullable::new(alice(), true), Nullable::with_value(alice()));
	assert_eq!(Nullable::new(alice(), false), Nullable::null());
	assert_eq!(Nullable::new(alice(), false).get().0, &Profile::default());
}

#[test]
fn option() {
	let profile = alice();
	let nullable = Nullable::from_option(Some(&profile));
	assert_eq!(nullable.as_option(), Some(&profile));
	let nullable = Nullable::<Profile>::from_option(None);
	assert_eq!(nullable.as_option(), None);
	assert_eq!(Nullable::from(Some(7)).into_option(), Some(7));
	assert_eq!(Nullable::<i32>::from(None).into_option(), None);
	let nullable = Nullable::from(Json::new(alice()));
	assert_eq!(
		Nullable::from_option(nullable.as_option()),
		Nullable::with_value(alice())
	);
}
