//! PLY Header Parser using nom
//!
//! Extracts the header block and walks it into a typed [`PlyHeader`].

use nom::{
    bytes::complete::{tag, take_till1},
    character::complete::multispace1,
    combinator::opt,
    multi::separated_list1,
    sequence::{preceded, terminated},
    IResult,
};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::lines::LineBuffer;
use crate::schema::{ElementDef, Encoding, PropertyDef};

/// Parsed PLY header: validity, encoding, declared elements, comments.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlyHeader {
    /// True when the magic line is present and no non-ascii encoding was
    /// declared.
    pub valid: bool,
    /// Encoding tag from the `format` line, if one was seen.
    pub encoding: Option<Encoding>,
    /// Elements in declaration order.
    pub elements: Vec<ElementDef>,
    /// Header lines mentioning `comment`, verbatim.
    pub comments: Vec<String>,
    /// Number of lines the header occupies, `end_header` included.
    pub line_count: usize,
}

/// Number of leading lines forming the header block: everything up to and
/// including the first line containing `end_header`. A file without the
/// marker is all header.
pub fn header_length(buffer: &LineBuffer<'_>) -> usize {
    for (index, line) in buffer.iter().enumerate() {
        if line.contains("end_header") {
            return index + 1;
        }
    }
    buffer.len()
}

impl PlyHeader {
    /// Walks the header block of `buffer` into a typed header.
    ///
    /// Validity is computed without short-circuiting: encoding and element
    /// information is available for diagnostics even when the document is
    /// rejected later. The only hard failure here is a `property` line with
    /// no preceding `element` to attach to.
    pub fn parse(buffer: &LineBuffer<'_>) -> Result<Self> {
        let line_count = header_length(buffer);
        let mut valid = buffer.line(0).is_some_and(|line| line.contains("ply"));
        let mut encoding = None;
        let mut elements: Vec<ElementDef> = Vec::new();
        let mut comments = Vec::new();

        for index in 0..line_count {
            let Some(line) = buffer.line(index) else { break };

            // Comment recording is substring-based and independent of the
            // keyword dispatch below.
            if line.contains("comment") {
                comments.push(line.to_string());
            }

            if let Ok((_, token)) = format_line(line) {
                let declared = Encoding::from_token(token);
                if !declared.is_ascii() {
                    valid = false;
                }
                encoding = Some(declared);
            } else if let Ok((_, (name, count))) = element_line(line) {
                elements.push(ElementDef::new(name, count));
            } else if let Ok((_, fields)) = property_line(line) {
                let Some(descriptor) = PropertyDef::from_fields(&fields) else {
                    continue;
                };
                match elements.last_mut() {
                    Some(element) => element.properties.push(descriptor),
                    None => {
                        return Err(Error::MalformedHeader {
                            line: index,
                            reason: "property declared before any element".to_string(),
                        })
                    }
                }
            }
        }

        Ok(Self {
            valid,
            encoding,
            elements,
            comments,
            line_count,
        })
    }

    /// Converts the computed validity state into typed failures. A declared
    /// non-ascii encoding is reported ahead of a missing magic line.
    pub fn validate(&self) -> Result<()> {
        match &self.encoding {
            Some(declared) if !declared.is_ascii() => {
                return Err(Error::UnsupportedEncoding {
                    found: declared.token().to_string(),
                });
            }
            None => {
                return Err(Error::MalformedHeader {
                    line: 0,
                    reason: "missing format declaration".to_string(),
                });
            }
            _ => {}
        }
        if !self.valid {
            return Err(Error::MalformedHeader {
                line: 0,
                reason: "missing ply magic".to_string(),
            });
        }
        Ok(())
    }

    /// True when a `format` line declared `ascii`.
    pub fn is_ascii(&self) -> bool {
        self.encoding.as_ref().is_some_and(Encoding::is_ascii)
    }

    /// First element with this exact name, if declared.
    pub fn element(&self, name: &str) -> Option<&ElementDef> {
        self.elements.iter().find(|element| element.name == name)
    }

    /// Position of the first element with this exact name.
    pub fn element_index(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.name == name)
    }
}

/// Parse one whitespace-delimited field
fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

/// Parse `format <token>`; the version field is ignored
fn format_line(input: &str) -> IResult<&str, &str> {
    preceded(terminated(tag("format"), multispace1), field)(input)
}

/// Parse `element <name> [<count>]`; a missing or non-numeric count is 0
fn element_line(input: &str) -> IResult<&str, (&str, usize)> {
    let (rest, _) = terminated(tag("element"), multispace1)(input)?;
    let (rest, name) = field(rest)?;
    let (rest, count) = opt(preceded(multispace1, field))(rest)?;
    Ok((rest, (name, parse_count(count.unwrap_or("")))))
}

/// Parse `property <field> ...` into its raw fields
fn property_line(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        terminated(tag("property"), multispace1),
        separated_list1(multispace1, field),
    )(input)
}

/// Complete non-negative integer parse; any other token counts as 0
fn parse_count(token: &str) -> usize {
    lexical_core::parse::<u64>(token.as_bytes())
        .map(|value| value as usize)
        .unwrap_or(0)
}
