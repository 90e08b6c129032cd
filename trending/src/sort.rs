//! Single-key, stable ordering of a filtered snapshot.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::entity::FieldValue;
use crate::entity::ListEntity;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[strum(serialize = "asc", serialize = "ascending")]
    Ascending,
    #[default]
    #[strum(serialize = "desc", serialize = "descending")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// The arrow drawn next to an active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The active sort column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub key: Option<F>,
    pub direction: SortDirection,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::default(),
        }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Direction used whenever a column is selected for the first time.
    /// Dashboards rank the largest values first.
    pub const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;

    pub fn by(key: F, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Applies a header click: the active column flips direction, a new
    /// column becomes active with [`Self::DEFAULT_DIRECTION`].
    pub fn toggled(self, key: F) -> Self {
        if self.key == Some(key) {
            Self {
                key: self.key,
                direction: self.direction.flipped(),
            }
        } else {
            Self::by(key, Self::DEFAULT_DIRECTION)
        }
    }

    pub fn is_active(&self, key: F) -> bool {
        self.key == Some(key)
    }
}

/// Ascending comparison of two field values.
///
/// Present values always come before `Missing`, independent of direction
/// handling, which is applied by the caller.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (FieldValue::Text(x), FieldValue::Text(y)) => collate(x, y),
        (FieldValue::Tags(x), FieldValue::Tags(y)) => {
            let x = x.first().map(String::as_str).unwrap_or("");
            let y = y.first().map(String::as_str).unwrap_or("");
            collate(x, y)
        }
        (FieldValue::Flag(x), FieldValue::Flag(y)) => x.cmp(y),
        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Greater,
        (_, FieldValue::Missing) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Case-folded comparison with an exact tie-break, so "apple" sorts next to
/// "Apple" rather than after every capitalised word.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Orders `entities` by the sort key. Ties keep their input order.
pub fn apply<E: ListEntity>(mut entities: Vec<E>, sort: &SortState<E::Field>) -> Vec<E> {
    let Some(key) = sort.key else {
        return entities;
    };

    // slice::sort_by is stable
    entities.sort_by(|a, b| {
        let ordering = compare_values(&a.field(key), &b.field(key));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    entities
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;
    use crate::entity::testing::ids;
    use crate::entity::testing::Col;
    use crate::entity::testing::Row;

    #[test]
    fn test_unset_key_is_passthrough() {
        let rows = vec![Row::new(3, "C", 1.0), Row::new(1, "A", 3.0), Row::new(2, "B", 2.0)];
        assert_eq!(apply(rows.clone(), &SortState::default()), rows);
    }

    #[test]
    fn test_numeric_sort_both_directions() {
        let rows = vec![Row::new(1, "A", 500.0), Row::new(2, "B", 1500.0), Row::new(3, "C", 1000.0)];

        let asc = apply(rows.clone(), &SortState::by(Col::Volume, SortDirection::Ascending));
        assert_eq!(ids(&asc), vec!["1", "3", "2"]);

        let desc = apply(rows, &SortState::by(Col::Volume, SortDirection::Descending));
        assert_eq!(ids(&desc), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_text_sort_folds_case() {
        let rows = vec![Row::new(1, "banana", 0.0), Row::new(2, "Apple", 0.0), Row::new(3, "cherry", 0.0)];
        let out = apply(rows, &SortState::by(Col::Name, SortDirection::Ascending));
        assert_eq!(ids(&out), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let rows: Vec<Row> = (0..40)
                .map(|i| Row::new(i, "X", rng.gen_range(0..5) as f64))
                .collect();
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let sorted = apply(rows.clone(), &SortState::by(Col::Volume, direction));
                for pair in sorted.windows(2) {
                    if pair[0].volume == pair[1].volume {
                        let a: u32 = pair[0].id.parse().unwrap();
                        let b: u32 = pair[1].id.parse().unwrap();
                        assert!(a < b, "tie reordered: {a} before {b}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_toggle_twice_reverses_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let rows: Vec<Row> = (0..30).map(|i| Row::new(i, "X", rng.gen_range(0.0..1e6))).collect();

        let once = SortState::default().toggled(Col::Volume);
        let twice = once.toggled(Col::Volume);

        let mut reversed = apply(rows.clone(), &once);
        reversed.reverse();
        assert_eq!(apply(rows, &twice), reversed);
    }

    #[test]
    fn test_new_key_resets_direction() {
        let state = SortState::by(Col::Volume, SortDirection::Ascending).toggled(Col::Name);
        assert_eq!(state.key, Some(Col::Name));
        assert_eq!(state.direction, SortState::<Col>::DEFAULT_DIRECTION);
        assert!(state.is_active(Col::Name));
        assert!(!state.is_active(Col::Volume));
    }

    #[test]
    fn test_missing_values_sort_last_ascending() {
        assert_eq!(compare_values(&FieldValue::Missing, &FieldValue::Number(1.0)), Ordering::Greater);
        assert_eq!(compare_values(&FieldValue::Number(1.0), &FieldValue::Missing), Ordering::Less);
        assert_eq!(compare_values(&FieldValue::Flag(false), &FieldValue::Flag(true)), Ordering::Less);
    }

    #[test]
    fn test_direction_parses_from_text() {
        assert_eq!(SortDirection::from_str("ASC").unwrap(), SortDirection::Ascending);
        assert_eq!(SortDirection::from_str("descending").unwrap(), SortDirection::Descending);
        assert!(SortDirection::from_str("sideways").is_err());
    }
}
