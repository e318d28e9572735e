//! CSV snapshots of the categories and questions tables.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use std::path::Path;

use super::queries::categories::{get_all_categories, import_categories};
use super::queries::questions::{get_all_questions, import_questions};
use super::{Category, Question};

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

#[derive(Debug, PartialEq, Eq)]
pub struct Counts {
    pub categories: usize,
    pub questions: usize,
}

pub async fn export_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<Counts> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !dir.exists() {
        std::fs::create_dir_all(dir)?
    }
    write_to(&dir.join(CATEGORIES_FILE), &categories)?;
    write_to(&dir.join(QUESTIONS_FILE), &questions)?;
    Ok(Counts {
        categories: categories.len(),
        questions: questions.len(),
    })
}

/// Replaces both tables with the snapshot in `dir`. Both files are parsed
/// before anything is written, and both tables are written in one
/// transaction, so a failed import leaves the database untouched.
pub async fn import_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<Counts> {
    let categories: Vec<Category> = read_from(&dir.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_from(&dir.join(QUESTIONS_FILE))?;
    let counts = Counts {
        categories: categories.len(),
        questions: questions.len(),
    };
    let mut tx = pool.begin().await?;
    import_categories(&mut *tx, categories).await?;
    import_questions(&mut *tx, questions).await?;
    tx.commit().await?;
    Ok(counts)
}

fn write_to(path: &Path, data: &[impl Serialize]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record.with_context(|| format!("Bad record in {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}
