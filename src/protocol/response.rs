//! Response parsing
//!
//! Converts a raw terminated response block into a structured value.

use std::collections::HashMap;
use std::fmt;

use crate::error::FormatError;

/// A parsed RRP response
///
/// Holds the status code and description from the first line of the block,
/// every attribute line keyed by its lower-cased name, and the raw text the
/// response was parsed from. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Response {
    code: u16,
    description: String,
    attributes: HashMap<String, Vec<String>>,
    raw: String,
}

impl Response {
    /// Parse a terminated response block.
    ///
    /// The first line must be `<code> <description>`. Every following line
    /// must be a `Key:Value` attribute until the terminator line (a single
    /// dot) is reached. Keys are lower-cased; a repeated key collects its
    /// values in encounter order. Lines are split on CRLF, with bare LF
    /// accepted as well.
    pub fn parse(block: &str) -> Result<Self, FormatError> {
        let mut lines = block
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty());

        let status_line = lines.next().ok_or(FormatError::MissingStatusLine)?;

        // Code runs up to the first space, description is the rest
        let (code, rest) = match status_line.find(' ') {
            Some(at) => (&status_line[..at], &status_line[at + 1..]),
            None => (status_line, ""),
        };

        let code: u16 = code.trim().parse().map_err(|_| FormatError::MissingCode)?;

        let description = rest.trim();
        if description.is_empty() {
            return Err(FormatError::MissingDescription);
        }

        let mut attributes: HashMap<String, Vec<String>> = HashMap::new();
        let mut terminated = false;

        for line in lines {
            if line.trim() == "." {
                terminated = true;
                break;
            }

            let colon = line
                .find(':')
                .ok_or_else(|| FormatError::MalformedAttribute(line.to_string()))?;

            let key = line[..colon].trim().to_lowercase();
            let value = line[colon + 1..].trim().to_string();

            attributes.entry(key).or_default().push(value);
        }

        if !terminated {
            return Err(FormatError::UnterminatedResponse);
        }

        Ok(Self {
            code,
            description: description.to_string(),
            attributes,
            raw: block.to_string(),
        })
    }

    /// The numeric status code from the first line
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The trimmed description from the first line
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All attributes, keyed by lower-cased name
    pub fn attributes(&self) -> &HashMap<String, Vec<String>> {
        &self.attributes
    }

    /// All values recorded for an attribute, in encounter order.
    /// Lookup is case-insensitive.
    pub fn attribute(&self, key: &str) -> Option<&[String]> {
        self.attributes
            .get(&key.to_lowercase())
            .map(|values| values.as_slice())
    }

    /// The first value recorded for an attribute
    pub fn first_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key)
            .and_then(|values| values.first())
            .map(|value| value.as_str())
    }

    /// Whether the code is in the 2xx success class
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// The original unparsed block, terminator included
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.description)?;
        for (key, values) in &self.attributes {
            for value in values {
                write!(f, "\n{}:{}", key, value)?;
            }
        }
        Ok(())
    }
}
