const NULL: &[u8] = b"null";

/// Check whether the bytes are the JSON `null` literal, ignoring surrounding JSON whitespace.
#[must_use]
pub fn is_null_literal(bytes: &[u8]) -> bool {
	trim(bytes) == NULL
}

fn trim(mut bytes: &[u8]) -> &[u8] {
	while let [first, rest @ ..] = bytes
		&& is_whitespace(*first)
	{
		bytes = rest;
	}
	while let [rest @ .., last] = bytes
		&& is_whitespace(*last)
	{
		bytes = rest;
	}
	bytes
}

fn is_whitespace(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
