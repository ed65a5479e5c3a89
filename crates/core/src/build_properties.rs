use std::collections::HashMap;

use crate::PropertiesError;

/// Key/value pairs loaded from a Java `.properties` file such as MPS's `build.properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProperties {
    entries: HashMap<String, String>,
}

/// Decode ISO-8859-1 bytes; every byte is the code point of the same value.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

impl BuildProperties {
    /// Parse the raw bytes of a properties file as Latin-1.
    ///
    /// # Errors
    /// Returns error if a `\uXXXX` escape is malformed.
    pub fn from_latin1(bytes: &[u8]) -> Result<Self, PropertiesError> {
        Self::parse(&decode_latin1(bytes))
    }

    /// Parse properties text following the `java.util.Properties` line format.
    ///
    /// # Errors
    /// Returns error if a `\uXXXX` escape is malformed.
    pub fn parse(content: &str) -> Result<Self, PropertiesError> {
        let normalized = content.replace("\r\n", "\n");
        let mut lines = normalized.split(['\n', '\r']).enumerate();
        let mut entries = HashMap::new();

        while let Some((index, line)) = lines.next() {
            let line = line.trim_start_matches(is_whitespace);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = String::new();
            let mut current = line;
            while ends_with_continuation(current) {
                logical.push_str(&current[..current.len() - 1]);
                match lines.next() {
                    Some((_, next)) => current = next.trim_start_matches(is_whitespace),
                    None => {
                        current = "";
                        break;
                    }
                }
            }
            logical.push_str(current);

            let (key, value) = split_entry(&logical, index + 1)?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split one logical line into an unescaped key and value
fn split_entry(line: &str, line_number: usize) -> Result<(String, String), PropertiesError> {
    let chars = line.chars().collect::<Vec<_>>();
    let mut key_end = chars.len();
    let mut value_start = chars.len();
    let mut has_separator = false;
    let mut preceding_backslash = false;

    for (i, &c) in chars.iter().enumerate() {
        if !preceding_backslash {
            if c == '=' || c == ':' {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            if is_whitespace(c) {
                key_end = i;
                value_start = i + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
    }

    while value_start < chars.len() && is_whitespace(chars[value_start]) {
        value_start += 1;
    }
    if !has_separator && value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
        value_start += 1;
        while value_start < chars.len() && is_whitespace(chars[value_start]) {
            value_start += 1;
        }
    }

    Ok((
        unescape(&chars[..key_end], line_number)?,
        unescape(&chars[value_start..], line_number)?,
    ))
}

fn unescape(chars: &[char], line_number: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(chars.len());
    // consecutive \u escapes are buffered so surrogate pairs decode together
    let mut units: Vec<u16> = Vec::new();
    let flush = |units: &mut Vec<u16>, out: &mut String| {
        out.extend(
            char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
        );
    };

    let mut iter = chars.iter().copied();
    while let Some(c) = iter.next() {
        if c != '\\' {
            flush(&mut units, &mut out);
            out.push(c);
            continue;
        }
        let Some(escaped) = iter.next() else {
            break;
        };
        if escaped == 'u' {
            let hex = iter.by_ref().take(4).collect::<String>();
            let unit = (hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()))
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .ok_or(PropertiesError::MalformedUnicodeEscape { line: line_number })?;
            units.push(unit);
            continue;
        }
        flush(&mut units, &mut out);
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }
    flush(&mut units, &mut out);

    Ok(out)
}
