//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_invoice--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: filter panel + table.
pub const PAGE_CAT_LIST: &str = "list";

/// View / edit page for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Creation form or wizard.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

/// `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a004_invoice", PAGE_CAT_LIST);
        assert_eq!(id, "a004_invoice--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a004_invoice"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_invoice--unknown"));
    }
}
