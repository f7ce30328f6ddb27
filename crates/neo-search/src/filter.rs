//! Field filters of the form `field:operator:value`.
//!
//! Supported fields form a closed set:
//!
//! | Field | Scope | Attribute |
//! |-------|-------|-----------|
//! | `diameter` | object | `diam_min` |
//! | `is_hazardous` | object | `hazard` |
//! | `distance` | orbit path | `miss` |
//!
//! Object filters compare the object's own attribute. Orbit filters pass
//! when at least one of the object's orbit paths satisfies the comparison.
//!
//! The value stays a string until the filter is applied. It is then read as
//! a number, or failing that as a boolean that is true only for the exact
//! literal `True`. Booleans compare as 1 and 0.

use std::fmt;
use std::str::FromStr;

use neo_types::{NearEarthObject, NeoError, OrbitPath};

/// Which record a filter field lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    Neo,
    OrbitPath,
}

/// Typed read access to a filterable attribute.
#[derive(Clone, Copy)]
pub enum FieldAccessor {
    Neo(fn(&NearEarthObject) -> f64),
    OrbitPath(fn(&OrbitPath) -> f64),
}

/// Filterable field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Diameter,
    IsHazardous,
    Distance,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Diameter => "diameter",
            FilterField::IsHazardous => "is_hazardous",
            FilterField::Distance => "distance",
        }
    }

    /// Attribute the field reads
    pub fn attribute(&self) -> &'static str {
        match self {
            FilterField::Diameter => "diam_min",
            FilterField::IsHazardous => "hazard",
            FilterField::Distance => "miss",
        }
    }

    pub fn scope(&self) -> FilterScope {
        match self.accessor() {
            FieldAccessor::Neo(_) => FilterScope::Neo,
            FieldAccessor::OrbitPath(_) => FilterScope::OrbitPath,
        }
    }

    pub fn accessor(&self) -> FieldAccessor {
        match self {
            FilterField::Diameter => FieldAccessor::Neo(|neo| neo.diam_min),
            FilterField::IsHazardous => FieldAccessor::Neo(|neo| bool_value(neo.hazard)),
            FilterField::Distance => FieldAccessor::OrbitPath(|orbit| orbit.miss),
        }
    }
}

impl FromStr for FilterField {
    type Err = NeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diameter" => Ok(FilterField::Diameter),
            "is_hazardous" => Ok(FilterField::IsHazardous),
            "distance" => Ok(FilterField::Distance),
            other => Err(NeoError::UnsupportedFeature(format!(
                "Unknown filter field {other:?}"
            ))),
        }
    }
}

/// How `>` and `<` compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    /// `>` acts as `>=` and `<` acts as `<=`.
    ///
    /// Known defect kept for compatibility with existing query scripts.
    #[default]
    Inclusive,
    /// `>` and `<` are strict.
    Strict,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Ge,
    Le,
    Eq,
    Gt,
    Lt,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }

    /// Compare `lhs` (attribute) against `rhs` (filter value).
    pub fn evaluate(&self, lhs: f64, rhs: f64, mode: ComparisonMode) -> bool {
        match (self, mode) {
            (Operator::Ge, _) | (Operator::Gt, ComparisonMode::Inclusive) => lhs >= rhs,
            (Operator::Le, _) | (Operator::Lt, ComparisonMode::Inclusive) => lhs <= rhs,
            (Operator::Eq, _) => lhs == rhs,
            (Operator::Gt, ComparisonMode::Strict) => lhs > rhs,
            (Operator::Lt, ComparisonMode::Strict) => lhs < rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = NeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">=" => Ok(Operator::Ge),
            "<=" => Ok(Operator::Le),
            "=" => Ok(Operator::Eq),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            other => Err(NeoError::UnsupportedFeature(format!(
                "Unknown filter operator {other:?}"
            ))),
        }
    }
}

/// A parsed filter expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: FilterField,
    pub operator: Operator,
    /// Raw value, coerced when the filter is applied
    pub value: String,
    pub mode: ComparisonMode,
}

impl Filter {
    /// Parse `field:operator:value` with the default comparison mode.
    pub fn parse(expr: &str) -> Result<Self, NeoError> {
        Self::parse_with_mode(expr, ComparisonMode::default())
    }

    pub fn parse_with_mode(expr: &str, mode: ComparisonMode) -> Result<Self, NeoError> {
        let parts: Vec<&str> = expr.split(':').collect();
        let [field, operator, value] = parts.as_slice() else {
            return Err(NeoError::UnsupportedFeature(format!(
                "Filter {expr:?} must have the form field:operator:value"
            )));
        };

        Ok(Self {
            field: field.parse()?,
            operator: operator.parse()?,
            value: (*value).to_string(),
            mode,
        })
    }

    /// Parse every expression, stopping at the first failure.
    pub fn create_filter_options<S: AsRef<str>>(
        exprs: &[S],
        mode: ComparisonMode,
    ) -> Result<Vec<Filter>, NeoError> {
        exprs
            .iter()
            .map(|expr| Self::parse_with_mode(expr.as_ref(), mode))
            .collect()
    }

    /// The filter value as a number: numeric text, else 1 for `True` and
    /// 0 for anything else.
    pub fn coerced_value(&self) -> f64 {
        self.value
            .trim()
            .parse::<f64>()
            .unwrap_or_else(|_| bool_value(self.value == "True"))
    }

    /// Whether `neo` passes this filter.
    pub fn matches(&self, neo: &NearEarthObject) -> bool {
        self.matches_value(neo, self.coerced_value())
    }

    fn matches_value(&self, neo: &NearEarthObject, value: f64) -> bool {
        match self.field.accessor() {
            FieldAccessor::Neo(read) => self.operator.evaluate(read(neo), value, self.mode),
            FieldAccessor::OrbitPath(read) => neo
                .orbits()
                .iter()
                .any(|orbit| self.operator.evaluate(read(orbit), value, self.mode)),
        }
    }

    /// Keep the candidates that pass this filter, in order.
    pub fn apply<'a>(&self, results: Vec<&'a NearEarthObject>) -> Vec<&'a NearEarthObject> {
        let value = self.coerced_value();
        results
            .into_iter()
            .filter(|neo| self.matches_value(neo, value))
            .collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.field.as_str(),
            self.operator.as_str(),
            self.value
        )
    }
}

fn bool_value(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}
