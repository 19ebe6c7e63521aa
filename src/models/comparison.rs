use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a version comparison
///
/// `Error` means one of the operands failed to parse. It is not ordered
/// relative to `True` or `False` and must be checked for explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    True,
    False,
    Error,
}

impl Comparison {
    pub fn is_true(self) -> bool {
        self == Comparison::True
    }

    pub fn is_false(self) -> bool {
        self == Comparison::False
    }

    pub fn is_error(self) -> bool {
        self == Comparison::Error
    }

    /// `Some(bool)` for a real outcome, `None` for `Error`
    pub fn to_option(self) -> Option<bool> {
        match self {
            Comparison::True => Some(true),
            Comparison::False => Some(false),
            Comparison::Error => None,
        }
    }

    /// Logical negation that leaves `Error` untouched
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Comparison::True => Comparison::False,
            Comparison::False => Comparison::True,
            Comparison::Error => Comparison::Error,
        }
    }

    /// Process exit code, following `test(1)`: 0 true, 1 false, 2 error
    pub fn exit_code(self) -> i32 {
        match self {
            Comparison::True => 0,
            Comparison::False => 1,
            Comparison::Error => 2,
        }
    }
}

impl From<bool> for Comparison {
    fn from(value: bool) -> Self {
        if value {
            Comparison::True
        } else {
            Comparison::False
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::True => write!(f, "true"),
            Comparison::False => write!(f, "false"),
            Comparison::Error => write!(f, "error"),
        }
    }
}

/// The six relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
            Relation::Lt => "<",
            Relation::Le => "<=",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Relation::Eq => "eq",
            Relation::Ne => "ne",
            Relation::Gt => "gt",
            Relation::Ge => "ge",
            Relation::Lt => "lt",
            Relation::Le => "le",
        }
    }

    pub fn all() -> &'static [Relation] {
        &[
            Relation::Eq,
            Relation::Ne,
            Relation::Gt,
            Relation::Ge,
            Relation::Lt,
            Relation::Le,
        ]
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown relation '{0}'. Expected one of: eq, ne, gt, ge, lt, le, ==, !=, >, >=, <, <=")]
pub struct UnknownRelation(pub String);

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eq" | "==" | "=" => Ok(Relation::Eq),
            "ne" | "!=" => Ok(Relation::Ne),
            "gt" | ">" => Ok(Relation::Gt),
            "ge" | ">=" => Ok(Relation::Ge),
            "lt" | "<" => Ok(Relation::Lt),
            "le" | "<=" => Ok(Relation::Le),
            _ => Err(UnknownRelation(s.to_string())),
        }
    }
}
