//! Border characters for plain-text tables.
//!
//! A table draws two kinds of lines: horizontal rules spanning the full
//! table width, and a vertical border closing every cell on its right.

use std::fmt;

/// Border character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderChars {
    /// Character repeated to draw horizontal rules.
    pub rule: char,
    /// Character closing each cell and the title line.
    pub vertical: char,
}

impl BorderChars {
    /// Create a new border character set.
    #[must_use]
    pub const fn new(rule: char, vertical: char) -> Self {
        Self { rule, vertical }
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        ASCII
    }
}

impl fmt::Display for BorderChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rule, self.vertical)
    }
}

/// Dashes and pipes; the default.
pub const ASCII: BorderChars = BorderChars::new('-', '|');

/// Light box-drawing lines.
pub const UNICODE: BorderChars = BorderChars::new('\u{2500}', '\u{2502}');

/// Heavy box-drawing lines.
pub const HEAVY: BorderChars = BorderChars::new('\u{2501}', '\u{2503}');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_default() {
        assert_eq!(BorderChars::default(), ASCII);
        assert_eq!(ASCII.to_string(), "-|");
    }

    #[test]
    fn test_unicode_sets() {
        assert_eq!(UNICODE.to_string(), "─│");
        assert_eq!(HEAVY.to_string(), "━┃");
    }
}
