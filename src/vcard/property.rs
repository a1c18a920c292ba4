//! vCard property records and their folded serialization.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::fold;

/// One vCard property: a name, ordered parameters, and a value.
///
/// Serialized as the logical line `NAME;key=value;...:value`, then folded
/// into physical lines for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: &'static str,
    params: Vec<(&'static str, String)>,
    value: String,
}

impl Property {
    /// Builds a `PHOTO` property carrying inline base64 image data.
    ///
    /// `type_tag` is the lowercase format tag for the `TYPE` parameter; the
    /// payload is encoded with the standard padded base64 alphabet, as one
    /// unbroken string.
    pub fn photo(type_tag: &str, data: &[u8]) -> Self {
        Self {
            name: "PHOTO",
            params: vec![("TYPE", type_tag.to_string()), ("ENCODING", "b".to_string())],
            value: STANDARD.encode(data),
        }
    }

    /// The unfolded logical line, parameters in insertion order.
    pub fn unfolded(&self) -> String {
        let mut line = String::with_capacity(self.value.len() + 32);
        line.push_str(self.name);
        for (key, value) in &self.params {
            line.push(';');
            line.push_str(key);
            line.push('=');
            line.push_str(value);
        }
        line.push(':');
        line.push_str(&self.value);
        line
    }

    /// Writes the property as folded, CRLF-terminated physical lines.
    pub fn write_folded<W: Write>(&self, out: &mut W) -> io::Result<()> {
        fold::write_folded(out, self.unfolded().as_bytes())
    }
}
