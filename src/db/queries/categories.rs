use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Makes the categories table match `categories`: unknown ids are dropped,
/// known ids renamed, new ids inserted with the id from the import.
pub async fn import_categories(
    conn: &mut SqliteConnection,
    categories: Vec<Category>,
) -> sqlx::Result<()> {
    let existing_ids: HashSet<i64> = sqlx::query_scalar::<_, i64>("SELECT id FROM categories")
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .collect();
    let new_ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();

    for id in existing_ids.difference(&new_ids) {
        sqlx::query("DELETE FROM categories WHERE categories.id = ?1")
            .bind(*id)
            .execute(&mut *conn)
            .await?;
    }
    for category in categories {
        if existing_ids.contains(&category.id) {
            sqlx::query("UPDATE categories SET type = ?1 WHERE categories.id = ?2")
                .bind(&category.kind)
                .bind(category.id)
                .execute(&mut *conn)
                .await?;
        } else {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?1, ?2)")
                .bind(category.id)
                .bind(&category.kind)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}
