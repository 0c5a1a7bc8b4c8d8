use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// An optional archival field value.
///
/// Source rows are duck-typed: the same column may arrive as a string, a
/// number, a boolean, or null depending on whether it came from the GraphQL
/// backend or a parsed delimited file. Every scalar is captured as its string
/// form; null and absent fields are `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Text(pub Option<String>);

impl Text {
	pub fn as_deref(&self) -> Option<&str> {
		self.0.as_deref()
	}

	pub fn is_none(&self) -> bool {
		self.0.is_none()
	}
}

impl From<&str> for Text {
	fn from(value: &str) -> Self {
		Self(Some(value.to_string()))
	}
}

impl From<Option<String>> for Text {
	fn from(value: Option<String>) -> Self {
		Self(value)
	}
}

impl<'de> Deserialize<'de> for Text {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct ScalarVisitor;

		impl<'de> de::Visitor<'de> for ScalarVisitor {
			type Value = Text;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				formatter.write_str("a scalar value or null")
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
				Ok(Text(Some(value.to_string())))
			}

			fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
				Ok(Text(Some(value)))
			}

			fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
				Ok(Text(Some(value.to_string())))
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
				Ok(Text(Some(value.to_string())))
			}

			fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
				Ok(Text(Some(value.to_string())))
			}

			fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
				Ok(Text(Some(value.to_string())))
			}

			fn visit_unit<E>(self) -> Result<Self::Value, E> {
				Ok(Text(None))
			}

			fn visit_none<E>(self) -> Result<Self::Value, E> {
				Ok(Text(None))
			}

			fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
			where
				D: Deserializer<'de>,
			{
				deserializer.deserialize_any(ScalarVisitor)
			}
		}

		deserializer.deserialize_any(ScalarVisitor)
	}
}
