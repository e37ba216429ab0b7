use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Comparison operators usable in choice rules.
///
/// The wire tokens are stable identifiers shared by the persisted rule
/// configuration and the payload delivered to the live context. Rule
/// configuration originates from editor-produced JSON and is never trusted:
/// an unrecognized token deserializes to [`Operator::Unknown`], which
/// matches nothing, instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    Is,
    IsNot,
    Contains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    IsEmpty,
    IsNotEmpty,
    /// Unrecognized wire token. Fails closed in every comparison.
    Unknown,
}

impl Operator {
    /// The public operators in catalog order, as presented to rule editors.
    pub const ALL: [Operator; 11] = [
        Operator::Is,
        Operator::IsNot,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
    ];

    /// Parse a wire token. Total: unrecognized tokens become
    /// [`Operator::Unknown`].
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "is" => Operator::Is,
            "isnot" => Operator::IsNot,
            "contains" => Operator::Contains,
            "starts_with" => Operator::StartsWith,
            "ends_with" => Operator::EndsWith,
            ">" => Operator::GreaterThan,
            "<" => Operator::LessThan,
            ">=" => Operator::GreaterOrEqual,
            "<=" => Operator::LessOrEqual,
            "is_empty" => Operator::IsEmpty,
            "is_not_empty" => Operator::IsNotEmpty,
            _ => Operator::Unknown,
        }
    }

    /// The stable wire identifier.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Operator::Is => "is",
            Operator::IsNot => "isnot",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::Unknown => "unknown",
        }
    }

    /// Human-readable label for editor catalogs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Operator::Is => "is",
            Operator::IsNot => "is not",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts with",
            Operator::EndsWith => "ends with",
            Operator::GreaterThan => "greater than",
            Operator::LessThan => "less than",
            Operator::GreaterOrEqual => "greater or equal",
            Operator::LessOrEqual => "less or equal",
            Operator::IsEmpty => "is empty",
            Operator::IsNotEmpty => "is not empty",
            Operator::Unknown => "unknown",
        }
    }

    /// Whether the operator ignores the rule's literal operand
    /// (`is_empty` and `is_not_empty` test the field value alone).
    #[must_use]
    pub fn ignores_value(self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Operator::parse(&token))
    }
}
