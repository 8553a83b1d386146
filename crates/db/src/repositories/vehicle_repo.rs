//! Repository for the `vehicles` table, reached through `people_vehicles`.

use swapi_core::types::DbId;

use crate::models::vehicle::{Vehicle, VehicleRow};
use crate::Database;

const COLUMNS: &str = "CAST(v.id AS INTEGER) AS id, \
     COALESCE(CAST(v.name AS TEXT), '') AS name, \
     COALESCE(CAST(v.model AS TEXT), '') AS model, \
     COALESCE(CAST(v.manufacturer AS TEXT), '') AS manufacturer, \
     CAST(v.cost_in_credits AS TEXT) AS cost_in_credits, \
     CASE typeof(v.length) WHEN 'real' THEN printf('%!.17g', v.length) ELSE CAST(v.length AS TEXT) END AS length, \
     CAST(v.max_atmosphering_speed AS TEXT) AS max_atmosphering_speed, \
     CAST(v.crew AS TEXT) AS crew, \
     CAST(v.passengers AS TEXT) AS passengers, \
     CAST(v.cargo_capacity AS TEXT) AS cargo_capacity, \
     CAST(v.consumables AS TEXT) AS consumables, \
     COALESCE(CAST(v.vehicle_class AS TEXT), '') AS vehicle_class, \
     COALESCE(CAST(v.created AS TEXT), '') AS created, \
     COALESCE(CAST(v.edited AS TEXT), '') AS edited";

pub struct VehicleRepo;

impl VehicleRepo {
    /// All vehicles associated with a person, in join order.
    pub async fn list_by_person(db: &Database, person_id: DbId) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM vehicles v
             INNER JOIN people_vehicles pv
                 ON CAST(v.id AS INTEGER) = CAST(pv.vehicles AS INTEGER)
             WHERE CAST(pv.people AS INTEGER) = $1"
        );
        let rows = sqlx::query_as::<_, VehicleRow>(&query)
            .bind(person_id)
            .fetch_all(db.pool())
            .await?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}
