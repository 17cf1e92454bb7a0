// Copyright © 2023–2026 The Kilim Developers

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.

use crate::integer::big::Integer;
use serde::de::{
    Deserialize, Deserializer, Error as DeError, MapAccess, SeqAccess,
    Visitor,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::{Formatter, Result as FmtResult};

impl Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let radix = if self.significant_bits() <= 32 { 10 } else { 16 };
        let value = self.to_string_radix(radix);
        let mut state = serializer.serialize_struct("Integer", 2)?;
        state.serialize_field("radix", &radix)?;
        state.serialize_field("value", &value)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D>(deserializer: D) -> Result<Integer, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Integer", FIELDS, BigVisitor)
    }
}

const FIELDS: &[&str] = &["radix", "value"];

enum Field {
    Radix,
    Value,
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("`radix` or `value`")
    }

    fn visit_str<E>(self, value: &str) -> Result<Field, E>
    where
        E: DeError,
    {
        match value {
            "radix" => Ok(Field::Radix),
            "value" => Ok(Field::Value),
            _ => Err(DeError::unknown_field(value, FIELDS)),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct BigVisitor;

impl<'de> Visitor<'de> for BigVisitor {
    type Value = Integer;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("Integer")
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Integer, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let radix: i32 = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(0, &self))?;
        let value: String = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(1, &self))?;
        from_parts(radix, &value)
    }

    fn visit_map<V>(self, mut map: V) -> Result<Integer, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut radix = None;
        let mut value = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Radix => {
                    if radix.is_some() {
                        return Err(DeError::duplicate_field("radix"));
                    }
                    radix = Some(map.next_value()?);
                }
                Field::Value => {
                    if value.is_some() {
                        return Err(DeError::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
            }
        }
        let radix = radix.ok_or_else(|| DeError::missing_field("radix"))?;
        let value: String =
            value.ok_or_else(|| DeError::missing_field("value"))?;
        from_parts(radix, &value)
    }
}

fn from_parts<E: DeError>(radix: i32, value: &str) -> Result<Integer, E> {
    if !(2..=62).contains(&radix) {
        return Err(DeError::custom(format_args!(
            "radix {} out of range",
            radix
        )));
    }
    Integer::from_str_radix(value, radix).map_err(DeError::custom)
}

#[cfg(test)]
mod tests {
    use crate::{Assign, Integer};
    use serde_json::json;

    fn check_json(i: &Integer, radix: i32, value: &str) {
        let enc = serde_json::to_value(i).unwrap();
        assert_eq!(enc, json!({ "radix": radix, "value": value }));
        let dec: Integer = serde_json::from_value(enc).unwrap();
        assert_eq!(&dec, i);
    }

    #[test]
    fn check() {
        let mut i = Integer::new();
        check_json(&i, 10, "0");

        i.assign(-0xffff_ffff_i64);
        check_json(&i, 10, "-4294967295");

        i = i.abs() + 1;
        check_json(&i, 16, "100000000");
    }

    #[test]
    fn check_errors() {
        let bad: Result<Integer, _> =
            serde_json::from_value(serde_json::json!({
                "radix": 1,
                "value": "0"
            }));
        assert!(bad.is_err());
        let bad: Result<Integer, _> =
            serde_json::from_value(serde_json::json!({
                "radix": 10,
                "value": "12x"
            }));
        assert!(bad.is_err());
    }
}
