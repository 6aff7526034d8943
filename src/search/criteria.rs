//! Search criteria: a date dimension and named multi-valued tag filters

use super::error::SearchError;
use crate::model::{Tag, incomplete_row, parse_values};
use chrono::NaiveDate;

/// The date dimension of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// No date criterion; every photo passes
    #[default]
    None,
    /// Photos taken on this calendar day
    Single(NaiveDate),
    /// Photos strictly between the two bounds
    ///
    /// Both bounds are exclusive. With only one bound (or none) supplied the
    /// range does not filter at all.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateFilter {
    /// Whether the user supplied any date at all
    ///
    /// A range with a single bound counts as supplied even though it ends up
    /// matching everything.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        match self {
            Self::None => false,
            Self::Single(_) => true,
            Self::Range { start, end } => start.is_some() || end.is_some(),
        }
    }

    #[must_use]
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::Single(day) => date == *day,
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => date > *start && date < *end,
            Self::None | Self::Range { .. } => true,
        }
    }
}

/// One named search dimension accepting any of several values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    name: String,
    values: Vec<String>,
}

impl TagFilter {
    /// Build a filter from raw input: `raw` is a comma-separated value list
    ///
    /// # Examples
    /// ```
    /// use photos::search::TagFilter;
    /// let filter = TagFilter::parse("Person", "Alice, bob");
    /// assert_eq!(filter.name(), "person");
    /// assert_eq!(filter.values(), &["alice", "bob"]);
    /// ```
    #[must_use]
    pub fn parse(name: &str, raw: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            values: parse_values(raw),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// One concrete tag per value
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.values.iter().map(|value| Tag::new(self.name.clone(), value.clone()))
    }
}

/// Everything a search filters on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub date: DateFilter,
    pub tags: Vec<TagFilter>,
}

impl SearchCriteria {
    #[must_use]
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::default()
    }

    /// Build criteria from free-form tag rows, validating them first
    ///
    /// Rows with both parts blank are skipped.
    ///
    /// # Errors
    /// Returns `SearchError::IncompleteTagFilter` for a row with only a name
    /// or only values.
    pub fn from_rows(date: DateFilter, rows: &[(String, String)]) -> Result<Self, SearchError> {
        if let Some(problem) = rows.iter().find_map(|(name, value)| incomplete_row(name, value)) {
            return Err(SearchError::IncompleteTagFilter(problem));
        }

        let tags = rows
            .iter()
            .filter(|(name, _)| !name.trim().is_empty())
            .map(|(name, value)| TagFilter::parse(name, value))
            .collect();
        Ok(Self { date, tags })
    }

    /// True when there is no date and no tag value to search for
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.date.is_set() && self.tags.iter().all(|filter| filter.values.is_empty())
    }

    /// All tag filters expanded into concrete tags, in order
    #[must_use]
    pub fn flatten(&self) -> Vec<Tag> {
        self.tags.iter().flat_map(TagFilter::tags).collect()
    }
}

/// Builder for `SearchCriteria`
#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    date: DateFilter,
    tags: Vec<TagFilter>,
}

impl SearchCriteriaBuilder {
    /// Match photos taken on `day`
    #[must_use]
    pub const fn on(mut self, day: NaiveDate) -> Self {
        self.date = DateFilter::Single(day);
        self
    }

    /// Match photos strictly between `start` and `end`
    #[must_use]
    pub const fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date = DateFilter::Range { start, end };
        self
    }

    #[must_use]
    pub const fn date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    /// Comma-separated `person` values
    #[must_use]
    pub fn person(self, raw: &str) -> Self {
        self.tag("person", raw)
    }

    /// Comma-separated `location` values
    #[must_use]
    pub fn location(self, raw: &str) -> Self {
        self.tag("location", raw)
    }

    /// Comma-separated values for any tag name
    #[must_use]
    pub fn tag(mut self, name: &str, raw: &str) -> Self {
        self.tags.push(TagFilter::parse(name, raw));
        self
    }

    #[must_use]
    pub fn build(self) -> SearchCriteria {
        SearchCriteria {
            date: self.date,
            tags: self.tags,
        }
    }
}
