//! Merging of inline `style` attribute text.
//!
//! A style fragment is a `;`-separated list of `property:value` pairs. When
//! fragments are merged, a property keeps the position of its first
//! occurrence and takes the value of its last.

use std::fmt;

/// An ordered property map built from one or more style fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a single fragment.
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let mut map = Self::new();
        map.extend_from(style);
        map
    }

    /// Add every declaration of `style`, left to right.
    ///
    /// Each `;`-separated fragment is split on its first `:`. Fragments
    /// without a colon, or with an empty property or value after trimming,
    /// are skipped. Double quotes in values become single quotes so the
    /// result stays valid inside a double-quoted attribute.
    pub fn extend_from(&mut self, style: &str) {
        for fragment in style.split(';') {
            let Some((property, value)) = fragment.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            self.set(property, value.replace('"', "'"));
        }
    }

    /// Set `property`, keeping its position if it is already present.
    pub fn set(&mut self, property: &str, value: String) {
        match self.entries.iter_mut().find(|(name, _)| name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property.to_string(), value)),
        }
    }

    /// The value of `property`, if present.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(property, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of properties.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no properties.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Writes `property:value` pairs joined by `;`, without a trailing separator.
impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{property}:{value}")?;
        }
        Ok(())
    }
}

/// Merge `new_style` into `old_style`.
///
/// Properties from `old_style` come first, in their original order, followed
/// by properties only present in `new_style`. Where both define a property,
/// the value from `new_style` wins. Pass `""` for a missing side.
#[must_use]
pub fn merge_styles(old_style: &str, new_style: &str) -> String {
    let mut map = StyleMap::parse(old_style);
    map.extend_from(new_style);
    map.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_split_on_first_colon() {
        let map = StyleMap::parse("background:url(http://example.com/a.png)");
        assert_eq!(
            map.get("background"),
            Some("url(http://example.com/a.png)")
        );
    }

    #[test]
    fn test_malformed_fragments_are_skipped() {
        let map = StyleMap::parse("color;:red;margin: ;padding:1px;;");
        assert_eq!(map.to_string(), "padding:1px");
    }

    #[test]
    fn test_quotes_are_normalized() {
        let map = StyleMap::parse(r#"font-family: "Helvetica Neue", sans-serif"#);
        assert_eq!(map.get("font-family"), Some("'Helvetica Neue', sans-serif"));
    }

    #[test]
    fn test_set_keeps_position() {
        let mut map = StyleMap::parse("a:1;b:2");
        map.set("a", "3".to_string());
        assert_eq!(map.to_string(), "a:3;b:2");
        assert_eq!(map.len(), 2);
    }
}
