//! Sort options for the character list and the comparator behind them.

use super::character::Character;
use std::cmp::Ordering;

/// Field the list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    Modified,
}

impl SortField {
    /// Parses a query value. Anything unrecognised is the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "modified" => Self::Modified,
            _ => Self::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Modified => "modified",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses a query value. Anything unrecognised is the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub sort: SortField,
    pub order: SortOrder,
}

impl SortOptions {
    pub fn new(sort: SortField, order: SortOrder) -> Self {
        Self { sort, order }
    }

    /// Builds options from raw `sort`/`order` query values; absent or invalid values
    /// behave as if omitted.
    pub fn from_query(sort: Option<&str>, order: Option<&str>) -> Self {
        Self {
            sort: sort.map(SortField::parse).unwrap_or_default(),
            order: order.map(SortOrder::parse).unwrap_or_default(),
        }
    }

    /// Comparison key for one record.
    fn key(&self, c: &Character) -> String {
        match self.sort {
            SortField::Name => c.label().to_lowercase(),
            SortField::Modified => c.modified().unwrap_or_default(),
        }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let ord = a.cmp(b);
        match self.order {
            SortOrder::Asc => ord,
            // Negate the comparison (not the output) so ties keep their dataset order.
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Returns a sorted copy of `records`. The sort is stable.
pub fn sort_characters(records: &[Character], options: &SortOptions) -> Vec<Character> {
    let mut keyed: Vec<(String, &Character)> =
        records.iter().map(|c| (options.key(c), c)).collect();
    keyed.sort_by(|(a, _), (b, _)| options.compare(a, b));
    keyed.into_iter().map(|(_, c)| c.clone()).collect()
}
