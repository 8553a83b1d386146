//! Repository for the `people` table.

use swapi_core::types::{now_timestamp, DbId};

use crate::models::person::{Person, PersonInput, PersonRow};
use crate::Database;

/// Column list shared across reads.
///
/// Identities are compared and ordered as integers whatever their storage
/// class. Nullable columns come back as text so sentinel handling happens
/// in one place, [`swapi_core::normalize`]. REAL values are printed with 17
/// significant digits; `CAST(... AS TEXT)` keeps only 15.
const COLUMNS: &str = "CAST(id AS INTEGER) AS id, \
     COALESCE(CAST(name AS TEXT), '') AS name, \
     CAST(height AS TEXT) AS height, \
     CASE typeof(mass) WHEN 'real' THEN printf('%!.17g', mass) ELSE CAST(mass AS TEXT) END AS mass, \
     CAST(hair_color AS TEXT) AS hair_color, \
     CAST(skin_color AS TEXT) AS skin_color, \
     CAST(eye_color AS TEXT) AS eye_color, \
     CAST(birth_year AS TEXT) AS birth_year, \
     CAST(gender AS TEXT) AS gender, \
     COALESCE(CAST(created AS TEXT), '') AS created, \
     COALESCE(CAST(edited AS TEXT), '') AS edited";

/// Association tables holding a `people` column, cleared on delete.
const ASSOCIATION_TABLES: [&str; 3] = ["people_vehicles", "people_starships", "people_species"];

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Find a person by identity.
    pub async fn find_by_id(db: &Database, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE CAST(id AS INTEGER) = $1");
        let row = sqlx::query_as::<_, PersonRow>(&query)
            .bind(id)
            .fetch_optional(db.pool())
            .await?;
        Ok(row.map(Person::from))
    }

    /// One page of people, ordered by identity ascending.
    ///
    /// `page` is 1-based. A page past the end yields an empty list.
    pub async fn find_all(
        db: &Database,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let per_page = per_page.max(0);
        let offset = page.saturating_sub(1).max(0).saturating_mul(per_page);
        let query = format!(
            "SELECT {COLUMNS} FROM people
             ORDER BY CAST(id AS INTEGER) ASC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, PersonRow>(&query)
            .bind(per_page)
            .bind(offset)
            .fetch_all(db.pool())
            .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    /// Total number of people.
    ///
    /// Runs independently of [`find_all`](Self::find_all); a write landing
    /// between the two calls makes the pair disagree.
    pub async fn count(db: &Database) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM people")
            .fetch_one(db.pool())
            .await
    }

    /// Insert a new person with the next free identity.
    ///
    /// The identity is `max(id) + 1` (1 for an empty table). Reading the
    /// maximum and inserting are two statements; they are only race free
    /// because every writer in the process holds the write lock and nothing
    /// else writes to the file.
    pub async fn create(db: &Database, input: PersonInput) -> Result<Person, sqlx::Error> {
        let _guard = db.write_lock().await;

        let id = sqlx::query_scalar::<_, DbId>(
            "SELECT COALESCE(MAX(CAST(id AS INTEGER)), 0) + 1 FROM people",
        )
        .fetch_one(db.pool())
        .await?;

        let now = now_timestamp();
        let person = input.into_person(id, now.clone(), now);

        sqlx::query(
            "INSERT INTO people
                (id, url, name, height, mass, hair_color, skin_color, eye_color,
                 birth_year, gender, created, edited)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(person.id)
        .bind(person.id)
        .bind(&person.name)
        .bind(person.height)
        .bind(person.mass)
        .bind(&person.hair_color)
        .bind(&person.skin_color)
        .bind(&person.eye_color)
        .bind(&person.birth_year)
        .bind(&person.gender)
        .bind(&person.created)
        .bind(&person.edited)
        .execute(db.pool())
        .await?;

        tracing::info!(person_id = person.id, "Person created");
        Ok(person)
    }

    /// Replace every mutable field of the person with identity `id` and
    /// refresh `edited`. `created` is never touched.
    ///
    /// Returns `true` if exactly one row was updated; never inserts.
    pub async fn update(db: &Database, id: DbId, input: &PersonInput) -> Result<bool, sqlx::Error> {
        let _guard = db.write_lock().await;

        let result = sqlx::query(
            "UPDATE people SET
                name = $1,
                height = $2,
                mass = $3,
                hair_color = $4,
                skin_color = $5,
                eye_color = $6,
                birth_year = $7,
                gender = $8,
                edited = $9
             WHERE CAST(id AS INTEGER) = $10",
        )
        .bind(&input.name)
        .bind(input.height)
        .bind(input.mass)
        .bind(&input.hair_color)
        .bind(&input.skin_color)
        .bind(&input.eye_color)
        .bind(&input.birth_year)
        .bind(&input.gender)
        .bind(now_timestamp())
        .bind(id)
        .execute(db.pool())
        .await?;

        let updated = result.rows_affected() == 1;
        tracing::debug!(person_id = id, updated, "Person update applied");
        Ok(updated)
    }

    /// Permanently delete a person and its association rows.
    ///
    /// All four deletes run in one transaction; if any fails the transaction
    /// is dropped uncommitted and rolls back. A missing identity is not an
    /// error.
    pub async fn delete(db: &Database, id: DbId) -> Result<(), sqlx::Error> {
        let _guard = db.write_lock().await;

        let mut tx = db.pool().begin().await?;

        let removed = sqlx::query("DELETE FROM people WHERE CAST(id AS INTEGER) = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        for table in ASSOCIATION_TABLES {
            sqlx::query(&format!(
                "DELETE FROM {table} WHERE CAST(people AS INTEGER) = $1"
            ))
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(person_id = id, removed, "Person deleted");
        Ok(())
    }
}
