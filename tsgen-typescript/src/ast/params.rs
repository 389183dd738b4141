//! Parameters and parameter lists.

use std::fmt;

/// A typed parameter, rendered as `name: type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// Ordered parameters, rendered on a single line joined by `, `.
///
/// An empty list renders as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList(Vec<Param>);

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, param: Param) {
        self.0.push(param);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }
}

impl FromIterator<Param> for ParamList {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param() {
        assert_eq!(Param::new("input", "string").to_string(), "input: string");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(ParamList::new().to_string(), "");
    }

    #[test]
    fn test_single_param_has_no_separator() {
        let list: ParamList = [Param::new("id", "number")].into_iter().collect();
        assert_eq!(list.to_string(), "id: number");
    }

    #[test]
    fn test_params_joined_in_order() {
        let list: ParamList = [
            Param::new("a", "string"),
            Param::new("b", "number"),
            Param::new("c", "Date"),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.to_string(), "a: string, b: number, c: Date");
        assert_eq!(list.len(), 3);
    }
}
