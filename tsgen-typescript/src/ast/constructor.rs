//! Class constructor builder.

use std::fmt;

use tsgen_codegen::{CodeFragment, Renderable};

use super::{Param, ParamList};
use crate::{Construct, Result};

/// A verbatim `lhs = rhs;` statement inside a constructor body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub lhs: String,
    pub rhs: String,
}

impl Assignment {
    pub fn new(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.lhs, self.rhs)
    }
}

/// Builder for a class constructor.
///
/// Parameters and assignments keep their own call order; nothing ties an
/// assignment to a parameter.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    params: ParamList,
    assignments: Vec<Assignment>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, ty: impl Into<String>) -> &mut Self {
        self.params.push(Param::new(name, ty));
        self
    }

    pub fn add_assignment(&mut self, lhs: impl Into<String>, rhs: impl Into<String>) -> &mut Self {
        self.assignments.push(Assignment::new(lhs, rhs));
        self
    }

    pub fn params(&self) -> &ParamList {
        &self.params
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("constructor({}) {{", self.params),
            self.assignments
                .iter()
                .map(|a| CodeFragment::Line(a.to_string()))
                .collect(),
        )]
    }
}

impl Construct for Constructor {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        Ok(self.to_fragments())
    }
}
