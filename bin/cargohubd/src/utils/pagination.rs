use cargohub_stubs::generic::{GenericListQuery, Pagination};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 100;

/// A list query once its defaults and bounds are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
  pub page: i64,
  pub limit: i64,
  /// Search term, `None` when absent or blank
  pub search: Option<String>,
}

impl Default for PageRequest {
  fn default() -> Self {
    Self {
      page: DEFAULT_PAGE,
      limit: DEFAULT_LIMIT,
      search: None,
    }
  }
}

impl PageRequest {
  pub fn offset(&self) -> i64 {
    (self.page - 1).saturating_mul(self.limit)
  }

  /// `%term%` pattern matched with `LIKE` against the searchable columns
  pub fn search_pattern(&self) -> Option<String> {
    self.search.as_ref().map(|term| format!("%{term}%"))
  }

  pub fn pagination(&self, total_records: i64) -> Pagination {
    Pagination::new(self.page, self.limit, total_records)
  }
}

impl From<&GenericListQuery> for PageRequest {
  fn from(qs: &GenericListQuery) -> Self {
    Self {
      page: qs.page.unwrap_or(DEFAULT_PAGE).max(1),
      limit: qs.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
      search: qs
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(ToOwned::to_owned),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn resolve(
    page: Option<i64>,
    limit: Option<i64>,
    search: Option<&str>,
  ) -> PageRequest {
    PageRequest::from(&GenericListQuery {
      page,
      limit,
      search: search.map(ToOwned::to_owned),
    })
  }

  #[test]
  fn defaults() {
    assert_eq!(resolve(None, None, None), PageRequest::default());
  }

  #[test]
  fn clamps() {
    assert_eq!(resolve(Some(0), None, None).page, 1);
    assert_eq!(resolve(Some(-4), None, None).page, 1);
    assert_eq!(resolve(None, Some(150), None).limit, 100);
    assert_eq!(resolve(None, Some(0), None).limit, 1);
    assert_eq!(resolve(None, Some(-1), None).limit, 1);
    assert_eq!(resolve(Some(3), Some(20), None).offset(), 40);
  }

  #[test]
  fn blank_search_is_no_filter() {
    assert_eq!(resolve(None, None, Some("")).search_pattern(), None);
    assert_eq!(resolve(None, None, Some("   ")).search_pattern(), None);
    assert_eq!(
      resolve(None, None, Some(" ABC ")).search_pattern().as_deref(),
      Some("%ABC%")
    );
  }

  #[test]
  fn total_pages() {
    let req = resolve(None, Some(50), None);
    assert_eq!(req.pagination(101).total_pages, 3);
    assert_eq!(req.pagination(0).total_pages, 0);
  }
}
