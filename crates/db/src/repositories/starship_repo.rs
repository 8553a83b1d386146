//! Repository for the `starships` table, reached through `people_starships`.

use swapi_core::types::DbId;

use crate::models::starship::{Starship, StarshipRow};
use crate::Database;

const COLUMNS: &str = "CAST(s.id AS INTEGER) AS id, \
     COALESCE(CAST(s.name AS TEXT), '') AS name, \
     COALESCE(CAST(s.model AS TEXT), '') AS model, \
     COALESCE(CAST(s.manufacturer AS TEXT), '') AS manufacturer, \
     CAST(s.cost_in_credits AS TEXT) AS cost_in_credits, \
     CASE typeof(s.length) WHEN 'real' THEN printf('%!.17g', s.length) ELSE CAST(s.length AS TEXT) END AS length, \
     CAST(s.max_atmosphering_speed AS TEXT) AS max_atmosphering_speed, \
     CAST(s.crew AS TEXT) AS crew, \
     CAST(s.passengers AS TEXT) AS passengers, \
     CAST(s.cargo_capacity AS TEXT) AS cargo_capacity, \
     CAST(s.consumables AS TEXT) AS consumables, \
     CASE typeof(s.hyperdrive_rating) WHEN 'real' THEN printf('%!.17g', s.hyperdrive_rating) \
         ELSE CAST(s.hyperdrive_rating AS TEXT) END AS hyperdrive_rating, \
     CAST(s.MGLT AS TEXT) AS mglt, \
     COALESCE(CAST(s.starship_class AS TEXT), '') AS starship_class, \
     COALESCE(CAST(s.created AS TEXT), '') AS created, \
     COALESCE(CAST(s.edited AS TEXT), '') AS edited";

pub struct StarshipRepo;

impl StarshipRepo {
    /// All starships associated with a person, in join order.
    ///
    /// No `ORDER BY`: the order is whatever SQLite produces for the join.
    pub async fn list_by_person(db: &Database, person_id: DbId) -> Result<Vec<Starship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM starships s
             INNER JOIN people_starships ps
                 ON CAST(s.id AS INTEGER) = CAST(ps.starships AS INTEGER)
             WHERE CAST(ps.people AS INTEGER) = $1"
        );
        let rows = sqlx::query_as::<_, StarshipRow>(&query)
            .bind(person_id)
            .fetch_all(db.pool())
            .await?;
        Ok(rows.into_iter().map(Starship::from).collect())
    }
}
