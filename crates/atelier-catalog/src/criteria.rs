/// Category tab filter: everything, or one category label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    /// A category label, matched case-insensitively against the raw
    /// `type` of each record.
    Kind(String),
}

impl TypeFilter {
    /// Parse a UI filter value: `"all"` (any case) selects everything.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            TypeFilter::Kind(s.to_string())
        }
    }
}

/// The field a creation list is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    Title,
    DateCreated,
    Creator,
    /// Fallback: order by a raw string property of the record. Unknown
    /// property names compare as the empty string.
    Field(String),
}

impl SortField {
    /// Parse a UI sort key. Unrecognized keys become [`SortField::Field`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "title" => SortField::Title,
            "dateCreated" | "date_created" => SortField::DateCreated,
            "creator" => SortField::Creator,
            other => SortField::Field(other.to_string()),
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::DateCreated
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Ephemeral view criteria, rebuilt on every user interaction.
///
/// The default is the view the app opens with: nothing filtered, newest
/// creations first.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Free text matched case-insensitively against title, notes, rights,
    /// and tags. `None` or empty means no search.
    pub search_query: Option<String>,
    pub type_filter: TypeFilter,
    /// Substring match against `createdBy` or `metadata.creator`.
    pub creator_filter: Option<String>,
    /// Substring match against any tag.
    pub tag_filter: Option<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}
