//! The generic record abstraction every list pipeline stage works against.

use std::fmt::Debug;
use std::hash::Hash;

/// A borrowed view of one field of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    /// A multi-valued categorical field, e.g. the labels of a wallet.
    Tags(&'a [String]),
    Flag(bool),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    /// True if any textual part of the value contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercase.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        match self {
            Self::Text(s) => s.to_lowercase().contains(needle_lower),
            Self::Tags(tags) => tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle_lower)),
            _ => false,
        }
    }

    /// True if the value (or any tag) equals `needle`, ignoring case.
    pub fn equals_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        match self {
            Self::Text(s) => s.to_lowercase() == needle,
            Self::Tags(tags) => tags.iter().any(|tag| tag.to_lowercase() == needle),
            _ => false,
        }
    }
}

/// A record that can be listed, searched, filtered, sorted and paged.
///
/// `Field` names a column. Implementors decide which columns take part in
/// free-text search, keyword lists and highlighting.
pub trait ListEntity: Clone + PartialEq + Debug + 'static {
    type Field: Copy + Eq + Hash + Debug + 'static;

    fn id(&self) -> &str;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// Columns matched by the search box (name, symbol, address).
    fn search_fields() -> &'static [Self::Field];

    /// Columns matched by include/exclude keyword lists.
    fn keyword_fields() -> &'static [Self::Field];

    /// Columns compared against a highlight needle passed in by navigation.
    fn highlight_fields() -> &'static [Self::Field] {
        Self::keyword_fields()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A tiny entity used by the pipeline tests.

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Col {
        Name,
        Symbol,
        Volume,
        Protocol,
        Paid,
        Labels,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: String,
        pub name: String,
        pub symbol: String,
        pub volume: f64,
        pub protocol: String,
        pub paid: bool,
        pub labels: Vec<String>,
    }

    impl Row {
        pub fn new(id: u32, name: &str, volume: f64) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                symbol: name.chars().take(4).collect::<String>().to_uppercase(),
                volume,
                protocol: "Raydium".to_string(),
                paid: false,
                labels: Vec::new(),
            }
        }

        pub fn protocol(mut self, protocol: &str) -> Self {
            self.protocol = protocol.to_string();
            self
        }

        pub fn paid(mut self, paid: bool) -> Self {
            self.paid = paid;
            self
        }

        pub fn labels(mut self, labels: &[&str]) -> Self {
            self.labels = labels.iter().map(|l| l.to_string()).collect();
            self
        }
    }

    impl ListEntity for Row {
        type Field = Col;

        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, field: Col) -> FieldValue<'_> {
            match field {
                Col::Name => FieldValue::Text(&self.name),
                Col::Symbol => FieldValue::Text(&self.symbol),
                Col::Volume => FieldValue::Number(self.volume),
                Col::Protocol => FieldValue::Text(&self.protocol),
                Col::Paid => FieldValue::Flag(self.paid),
                Col::Labels => FieldValue::Tags(&self.labels),
            }
        }

        fn search_fields() -> &'static [Col] {
            &[Col::Name, Col::Symbol]
        }

        fn keyword_fields() -> &'static [Col] {
            &[Col::Name, Col::Symbol]
        }

        fn highlight_fields() -> &'static [Col] {
            &[Col::Symbol, Col::Labels]
        }
    }

    pub fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(FieldValue::Number(f64::NAN).as_number(), None);
        assert_eq!(FieldValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(FieldValue::Text("2.5").as_number(), None);
    }

    #[test]
    fn tags_match_any_element() {
        let tags = vec!["Whale".to_string(), "Smart Money".to_string()];
        let value = FieldValue::Tags(&tags);
        assert!(value.contains_lowercase("smart"));
        assert!(value.equals_ignore_case("whale"));
        assert!(!value.equals_ignore_case("sniper"));
    }
}
