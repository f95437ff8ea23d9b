use diesel::prelude::*;

use cargohub_stubs::category::{Category, CategoryPartial, CategoryUpdate};

use crate::schema::categories;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryDb {
  pub id: i32,
  pub name: String,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct CategoryInsertDb {
  pub name: String,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

/// Changeset of a category, `None` fields are left untouched
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = categories)]
pub struct CategoryUpdateDb {
  pub name: Option<String>,
  pub updated_at: chrono::NaiveDateTime,
}

impl From<&CategoryPartial> for CategoryInsertDb {
  fn from(p: &CategoryPartial) -> Self {
    let now = chrono::Utc::now().naive_utc();
    Self {
      name: p.name.trim().to_owned(),
      created_at: now,
      updated_at: now,
    }
  }
}

impl From<&CategoryUpdate> for CategoryUpdateDb {
  fn from(p: &CategoryUpdate) -> Self {
    Self {
      name: p.name.as_ref().map(|name| name.trim().to_owned()),
      updated_at: chrono::Utc::now().naive_utc(),
    }
  }
}

impl From<CategoryDb> for Category {
  fn from(db: CategoryDb) -> Self {
    Self {
      id: db.id,
      name: db.name,
      created_at: db.created_at,
      updated_at: db.updated_at,
    }
  }
}
