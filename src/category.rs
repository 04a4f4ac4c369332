/// Target category and memo derived from the bank's own categorisation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMapping {
    pub category: String,
    pub memo: String,
}

/// Maps the bank's main category and category to a YNAB category.
///
/// No mapping table exists yet, so both fields always come back empty. Callers still let the
/// result replace the memo, which drops the direction tag for categorised lines.
pub fn map_category(_main_category: &str, _category: &str) -> CategoryMapping {
    CategoryMapping::default()
}
