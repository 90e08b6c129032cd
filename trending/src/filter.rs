//! Predicate filtering of a snapshot: free-text search plus named constraints.
//!
//! Every constraint is a pure predicate and all of them are combined with a
//! logical AND, so the order they are stored in never changes the result.
//! User input never fails here: text that does not parse is treated as
//! "no constraint".

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::entity::FieldValue;
use crate::entity::ListEntity;

/// One named filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint<F> {
    /// Inclusive numeric bounds. An unset bound imposes nothing.
    Range {
        field: F,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Categorical membership, stored lowercase. An empty set is inert.
    OneOf { field: F, allowed: BTreeSet<String> },
    /// Boolean column must equal `required` when it is set.
    Flag { field: F, required: Option<bool> },
    /// Passes if any keyword occurs in any keyword column.
    Include(Vec<String>),
    /// Fails if any keyword occurs in any keyword column.
    Exclude(Vec<String>),
}

impl<F: Copy> Constraint<F> {
    /// Builds a range from raw input box text.
    ///
    /// ```
    /// use trending::filter::Constraint;
    /// let c: Constraint<u8> = Constraint::range_from_text(0, "abc", "10");
    /// assert_eq!(c, Constraint::Range { field: 0, min: None, max: Some(10.0) });
    /// ```
    pub fn range_from_text(field: F, min: &str, max: &str) -> Self {
        Self::Range {
            field,
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    pub fn one_of<I, S>(field: F, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::OneOf {
            field,
            allowed: values
                .into_iter()
                .map(|v| v.as_ref().trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect(),
        }
    }

    pub fn include_from_text(text: &str) -> Self {
        Self::Include(parse_keywords(text))
    }

    pub fn exclude_from_text(text: &str) -> Self {
        Self::Exclude(parse_keywords(text))
    }

    /// False when the constraint holds no value and therefore passes everything.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Range { min, max, .. } => min.is_some() || max.is_some(),
            Self::OneOf { allowed, .. } => !allowed.is_empty(),
            Self::Flag { required, .. } => required.is_some(),
            Self::Include(keywords) | Self::Exclude(keywords) => !keywords.is_empty(),
        }
    }

    pub fn accepts<E>(&self, entity: &E) -> bool
    where
        E: ListEntity<Field = F>,
    {
        match self {
            Self::Range { field, min, max } => {
                if min.is_none() && max.is_none() {
                    return true;
                }
                let Some(value) = entity.field(*field).as_number() else {
                    return false;
                };
                min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
            }
            Self::OneOf { field, allowed } => {
                if allowed.is_empty() {
                    return true;
                }
                match entity.field(*field) {
                    FieldValue::Text(s) => allowed.contains(&s.to_lowercase()),
                    FieldValue::Tags(tags) => {
                        tags.iter().any(|t| allowed.contains(&t.to_lowercase()))
                    }
                    _ => false,
                }
            }
            Self::Flag { field, required } => match required {
                None => true,
                Some(required) => entity.field(*field) == FieldValue::Flag(*required),
            },
            Self::Include(keywords) => {
                keywords.is_empty() || keywords.iter().any(|k| keyword_hit(entity, k))
            }
            Self::Exclude(keywords) => !keywords.iter().any(|k| keyword_hit(entity, k)),
        }
    }
}

fn keyword_hit<E: ListEntity>(entity: &E, keyword_lower: &str) -> bool {
    E::keyword_fields()
        .iter()
        .any(|f| entity.field(*f).contains_lowercase(keyword_lower))
}

/// Parses a numeric bound typed by the user. Anything unusable is `None`.
///
/// Thousands separators, a leading `$` and surrounding whitespace are
/// accepted. Non-finite values ("NaN", "inf") are rejected.
pub fn parse_bound(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Splits a comma-separated keyword list into trimmed, lowercase, non-empty keywords.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// The full set of named constraints applied to a list.
///
/// Edits produce a new value; the previous state is never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F> {
    constraints: BTreeMap<String, Constraint<F>>,
}

impl<F> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            constraints: BTreeMap::new(),
        }
    }
}

impl<F: Copy> FilterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new state with `name` set to `constraint`, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, constraint: Constraint<F>) -> Self {
        self.constraints.insert(name.into(), constraint);
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.constraints.remove(name);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Constraint<F>> {
        self.constraints.get(name)
    }

    /// Constraints that actually restrict the result.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Constraint<F>)> {
        self.constraints
            .iter()
            .filter(|(_, c)| c.is_active())
            .map(|(name, c)| (name.as_str(), c))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

/// True if `entity` passes the search text and every constraint.
pub fn matches<E: ListEntity>(entity: &E, search: &str, filters: &FilterState<E::Field>) -> bool {
    let needle = search.trim().to_lowercase();
    let search_hit = needle.is_empty()
        || E::search_fields()
            .iter()
            .any(|f| entity.field(*f).contains_lowercase(&needle));

    search_hit && filters.constraints.values().all(|c| c.accepts(entity))
}

/// Keeps the entities that pass `search` and `filters`, preserving their order.
pub fn apply<E: ListEntity>(entities: &[E], search: &str, filters: &FilterState<E::Field>) -> Vec<E> {
    entities
        .iter()
        .filter(|e| matches(*e, search, filters))
        .cloned()
        .collect()
}
