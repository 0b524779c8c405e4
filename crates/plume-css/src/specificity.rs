//! A rough specificity weight computed from the text of a selector.
//!
//! This is a summary of the selector's shape, not the cascade's
//! [§ 17 specificity](https://www.w3.org/TR/selectors-4/#specificity-rules).
//! The inliner never consults it: conflicting declarations are resolved by
//! stylesheet order alone.

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "count the number of ID selectors in the selector (= A)
///  count the number of class selectors ... (= B)
///  count the number of type selectors ... (= C)"
///
/// Here A counts `#` characters, B counts `.` characters, and C is 1 when
/// anything other than `#name`/`.name` runs remains in the selector, else 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// Summarize `selector`.
    #[must_use]
    pub fn of(selector: &str) -> Self {
        let mut ids = 0;
        let mut classes = 0;
        let mut rest = String::with_capacity(selector.len());

        let mut chars = selector.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '#' | '.' => {
                    if c == '#' {
                        ids += 1;
                    } else {
                        classes += 1;
                    }
                    // A prefix with no name after it stays in the remainder.
                    if chars.peek().is_some_and(|&next| is_name_char(next)) {
                        while chars.next_if(|&next| is_name_char(next)).is_some() {}
                    } else {
                        rest.push(c);
                    }
                }
                _ => rest.push(c),
            }
        }

        let elements = u32::from(!rest.trim().is_empty());
        Self(ids, classes, elements)
    }

    /// Collapse the components into one number: `A*100 + B*10 + C`.
    #[must_use]
    pub const fn weight(self) -> u32 {
        self.0 * 100 + self.1 * 10 + self.2
    }
}

/// Weight of `selector` as a single number.
///
/// `#id` counts 100, `.class` counts 10, and any remaining tag text adds 1.
/// The empty selector weighs 0.
#[must_use]
pub fn calc_specificity(selector: &str) -> u32 {
    Specificity::of(selector).weight()
}

/// `[\w-]`: ASCII letters, digits, underscore and hyphen.
const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        assert_eq!(Specificity::of("div.note#main"), Specificity::new(1, 1, 1));
        assert_eq!(Specificity::of(".a .b"), Specificity::new(0, 2, 0));
        assert_eq!(Specificity::of("ul li"), Specificity::new(0, 0, 1));
    }

    #[test]
    fn test_bare_prefix_counts_and_remains() {
        // "#" alone is counted as an id but leaves text behind.
        assert_eq!(Specificity::of("#"), Specificity::new(1, 0, 1));
    }

    #[test]
    fn test_ordering_compares_ids_first() {
        assert!(Specificity::of("#a") > Specificity::of(".a.b.c.d"));
    }
}
