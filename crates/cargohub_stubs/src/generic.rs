#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Query string accepted by every paginated list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenericListQuery {
  /// Page number starting at 1
  #[cfg_attr(
    feature = "serde",
    serde(skip_serializing_if = "Option::is_none")
  )]
  pub page: Option<i64>,
  /// Number of rows per page
  #[cfg_attr(
    feature = "serde",
    serde(skip_serializing_if = "Option::is_none")
  )]
  pub limit: Option<i64>,
  /// Free text matched against the searchable columns
  #[cfg_attr(
    feature = "serde",
    serde(skip_serializing_if = "Option::is_none")
  )]
  pub search: Option<String>,
}

/// Pagination metadata returned alongside a page of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Pagination {
  pub page: i64,
  pub limit: i64,
  pub total_records: i64,
  pub total_pages: i64,
}

impl Pagination {
  /// `limit` is expected to be already clamped to a positive value
  pub fn new(page: i64, limit: i64, total_records: i64) -> Self {
    let limit = limit.max(1);
    Self {
      page,
      limit,
      total_records,
      total_pages: (total_records + limit - 1) / limit,
    }
  }
}

/// Count payload returned by bulk operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenericCount {
  /// Number of rows affected
  pub count: usize,
}

/// The envelope every endpoint answers with
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApiResponse<T> {
  pub success: bool,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub data: Option<T>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub message: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
  pub fn data(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
      pagination: None,
    }
  }

  pub fn with_message<M>(message: M, data: T) -> Self
  where
    M: ToString,
  {
    Self {
      success: true,
      data: Some(data),
      message: Some(message.to_string()),
      pagination: None,
    }
  }

  pub fn page(data: T, pagination: Pagination) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
      pagination: Some(pagination),
    }
  }
}

impl ApiResponse<()> {
  pub fn message<M>(message: M) -> Self
  where
    M: ToString,
  {
    Self {
      success: true,
      data: None,
      message: Some(message.to_string()),
      pagination: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn total_pages_rounds_up() {
    assert_eq!(Pagination::new(1, 50, 101).total_pages, 3);
    assert_eq!(Pagination::new(1, 50, 100).total_pages, 2);
    assert_eq!(Pagination::new(1, 50, 1).total_pages, 1);
    assert_eq!(Pagination::new(1, 50, 0).total_pages, 0);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn envelope_skips_missing_parts() {
    let res = ApiResponse::message("Order unassigned");
    assert_eq!(
      serde_json::to_value(&res).unwrap(),
      serde_json::json!({ "success": true, "message": "Order unassigned" })
    );
    let res = ApiResponse::page(vec![1, 2], Pagination::new(2, 2, 5));
    assert_eq!(
      serde_json::to_value(&res).unwrap(),
      serde_json::json!({
        "success": true,
        "data": [1, 2],
        "pagination": {
          "page": 2,
          "limit": 2,
          "totalRecords": 5,
          "totalPages": 3,
        },
      })
    );
  }
}
