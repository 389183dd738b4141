//! Indentation configuration for code generation.

/// Number of spaces that make up one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indent(usize);

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self(2);

    /// 4-space indentation.
    pub const WIDE: Self = Self(4);

    /// No indentation at all.
    pub const NONE: Self = Self(0);

    /// Widest indent renderers accept.
    pub const MAX_WIDTH: usize = 64;

    pub const fn spaces(width: usize) -> Self {
        Self(width)
    }

    /// Spaces per level.
    pub const fn width(&self) -> usize {
        self.0
    }

    /// Whitespace prefix for the given nesting level.
    pub fn at_level(&self, level: usize) -> String {
        " ".repeat(self.0 * level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

impl From<usize> for Indent {
    fn from(width: usize) -> Self {
        Self(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_level() {
        assert_eq!(Indent::spaces(2).at_level(1), "  ");
        assert_eq!(Indent::spaces(2).at_level(2), "    ");
        assert_eq!(Indent::spaces(3).at_level(2), "      ");
        assert_eq!(Indent::WIDE.at_level(0), "");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(Indent::NONE.at_level(5), "");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
        assert_eq!(Indent::from(7).width(), 7);
    }
}
