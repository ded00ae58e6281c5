//! PLY Schema Types
//!
//! Typed view of the header declarations: encoding tag, elements, and their
//! ordered property descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Encoding tag declared on the `format` line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Encoding {
    Ascii,
    BinaryLittleEndian,
    BinaryBigEndian,
    /// Any token this parser does not recognize (rejected downstream).
    Other(String),
}

impl Encoding {
    /// Maps a raw `format` token onto the encoding tag.
    pub fn from_token(token: &str) -> Self {
        match token {
            "ascii" => Encoding::Ascii,
            "binary_little_endian" => Encoding::BinaryLittleEndian,
            "binary_big_endian" => Encoding::BinaryBigEndian,
            other => Encoding::Other(other.to_string()),
        }
    }

    /// True for the only encoding this pipeline decodes.
    #[inline]
    pub fn is_ascii(&self) -> bool {
        matches!(self, Encoding::Ascii)
    }

    /// The token as written in the file.
    pub fn token(&self) -> &str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::BinaryLittleEndian => "binary_little_endian",
            Encoding::BinaryBigEndian => "binary_big_endian",
            Encoding::Other(token) => token,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One `element <name> <count>` declaration plus its property schema.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ElementDef {
    pub name: String,
    /// Number of body lines belonging to this element.
    pub count: usize,
    /// Ordered property descriptors; position here is column position.
    pub properties: Vec<PropertyDef>,
}

impl ElementDef {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
            properties: Vec::new(),
        }
    }
}

/// One `property ...` declaration.
///
/// Position within [`ElementDef::properties`] determines the column of the
/// property in each body line, so under-specified declarations keep their
/// slot (with an empty name) instead of being dropped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PropertyDef {
    /// `property <type> <name>`
    Scalar { type_name: String, name: String },
    /// `property list <countType> <itemType> <name>`
    List {
        count_type: String,
        item_type: String,
        name: String,
    },
}

impl PropertyDef {
    /// Builds a descriptor from the fields after the `property` keyword.
    ///
    /// `list` as the first field selects the list shape, whose name is the
    /// last field; anything else is a scalar, whose name is the second field.
    /// Returns `None` when no fields are present at all.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let first = *fields.first()?;
        if first == "list" {
            Some(PropertyDef::List {
                count_type: fields.get(1).copied().unwrap_or("").to_string(),
                item_type: fields.get(2).copied().unwrap_or("").to_string(),
                name: fields.last().copied().unwrap_or("").to_string(),
            })
        } else {
            Some(PropertyDef::Scalar {
                type_name: first.to_string(),
                name: fields.get(1).copied().unwrap_or("").to_string(),
            })
        }
    }

    /// The declared property name (empty for under-specified declarations).
    pub fn name(&self) -> &str {
        match self {
            PropertyDef::Scalar { name, .. } | PropertyDef::List { name, .. } => name,
        }
    }

    /// True for variable-length list properties.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, PropertyDef::List { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_tokens() {
        assert!(Encoding::from_token("ascii").is_ascii());
        assert!(!Encoding::from_token("binary_little_endian").is_ascii());
        assert_eq!(
            Encoding::from_token("binary_big_endian").token(),
            "binary_big_endian"
        );
        assert_eq!(Encoding::from_token("utf8").token(), "utf8");
    }

    #[test]
    fn test_scalar_property_from_fields() {
        let prop = PropertyDef::from_fields(&["float", "x"]).unwrap();
        assert_eq!(prop.name(), "x");
        assert!(!prop.is_list());
    }

    #[test]
    fn test_list_property_name_is_last_field() {
        let prop = PropertyDef::from_fields(&["list", "uchar", "int", "vertex_indices"]).unwrap();
        assert_eq!(prop.name(), "vertex_indices");
        assert!(prop.is_list());
    }

    #[test]
    fn test_under_specified_property_keeps_slot() {
        let prop = PropertyDef::from_fields(&["float"]).unwrap();
        assert_eq!(prop.name(), "");
        assert!(PropertyDef::from_fields(&[]).is_none());
    }
}
