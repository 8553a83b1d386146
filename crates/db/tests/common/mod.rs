#![allow(dead_code)]

use swapi_db::Database;
use tempfile::TempDir;

/// A database file in its own temporary directory. The directory is
/// removed when the value is dropped.
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

/// Open an empty dataset file with all tables created.
pub async fn empty_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::open(dir.path().join("test.dat"), 4)
        .await
        .expect("open test database");
    db.ensure_schema().await.expect("create schema");
    TestDb { db, _dir: dir }
}

/// Open a dataset file seeded with a small slice of the SWAPI data,
/// stored the way the original dump stores it (placeholders included).
pub async fn seeded_db() -> TestDb {
    let test_db = empty_db().await;
    sqlx::raw_sql(SEED)
        .execute(test_db.db.pool())
        .await
        .expect("seed test database");
    test_db
}

const SEED: &str = r#"
INSERT INTO people (id, url, name, height, mass, hair_color, skin_color, eye_color, birth_year, gender, homeworld, created, edited) VALUES
    (1, 1, 'Luke Skywalker', 172, 77, 'blond', 'fair', 'blue', '19BBY', 'male', 1, '2014-12-09T13:50:51.644000Z', '2014-12-20T21:17:56.891000Z'),
    (2, 2, 'C-3PO', 167, 75, 'na', 'gold', 'yellow', '112BBY', 'na', 1, '2014-12-10T15:10:51.357000Z', '2014-12-20T21:17:50.309000Z'),
    (10, 10, 'Obi-Wan Kenobi', 182, 77, 'auburn, white', 'fair', 'blue-gray', '57BBY', 'male', 20, '2014-12-10T16:16:29.192000Z', '2014-12-20T21:17:50.325000Z'),
    (16, 16, 'Jabba Desilijic Tiure', 175, '1,358', 'na', 'green-tan, brown', 'orange', '600BBY', 'hermaphrodite', 24, '2014-12-10T17:11:31.638000Z', '2014-12-20T21:17:50.338000Z'),
    (9, 9, 'Biggs Darklighter', 183, 84, 'black', 'light', 'brown', '24BBY', 'male', 1, '2014-12-10T15:59:50.509000Z', '2014-12-20T21:17:50.323000Z'),
    (82, 82, 'Sly Moore', 178, 48, 'none', 'pale', 'white', 'unknown', 'female', 60, '2014-12-20T20:18:37.619000Z', '2014-12-20T21:17:50.496000Z'),
    (71, 71, 'Ratts Tyerell', 79, 15, 'none', 'grey, blue', 'unknown', 'unknown', 'male', 38, '2014-12-20T09:53:15.086000Z', '2016-06-30T12:52:19.604868Z'),
    (3, 3, 'R2-D2', 96, 32, 'na', 'white, blue', 'red', '33BBY', 'na', 8, '2014-12-10T15:11:50.376000Z', '2014-12-20T21:17:50.311000Z'),
    (79, 79, 'Captain Phasma', 'unknown', 'unknown', 'unknown', 'unknown', 'unknown', 'unknown', 'female', 28, '2015-10-13T10:35:39.229823Z', '2015-10-13T10:35:39.229823Z');

INSERT INTO starships (id, url, name, model, manufacturer, cost_in_credits, length, max_atmosphering_speed, crew, passengers, cargo_capacity, consumables, hyperdrive_rating, MGLT, starship_class, created, edited) VALUES
    (12, 12, 'X-wing', 'T-65 X-wing', 'Incom Corporation', 149999, 12.5, 1050, 1, 0, 110, '1 week', 1.0, 100, 'Starfighter', '2014-12-12T11:19:05.340000Z', '2014-12-22T17:35:44.491233Z'),
    (22, 22, 'Imperial shuttle', 'Lambda-class T-4a shuttle', 'Sienar Fleet Systems', 240000, 20, 850, 6, 20, 80000, '2 months', 1.0, 50, 'Armed government transport', '2014-12-15T13:04:47.235000Z', '2014-12-22T17:35:44.795405Z'),
    (48, 48, 'Jedi starfighter', 'Delta-7 Aethersprite-class interceptor', 'Kuat Systems Engineering', 180000, 8, 1150, 1, 0, 60, '7 days', 1.0, 'unknown', 'Starfighter', '2014-12-20T09:41:39.500000Z', '2014-12-22T17:35:45.138000Z');

INSERT INTO vehicles (id, url, name, model, manufacturer, cost_in_credits, length, max_atmosphering_speed, crew, passengers, cargo_capacity, consumables, vehicle_class, created, edited) VALUES
    (14, 14, 'Snowspeeder', 't-47 airspeeder', 'Incom corporation', 'unknown', 4.5, 650, 2, 0, 10, 'none', 'airspeeder', '2014-12-15T12:22:12Z', '2014-12-22T18:21:15.623033Z'),
    (30, 30, 'Imperial Speeder Bike', '74-Z speeder bike', 'Aratech Repulsor Company', 8000, 3, 360, 1, 1, 4, '1 day', 'speeder', '2014-12-18T11:20:04.625000Z', '2014-12-22T18:21:15.920537Z'),
    (38, 38, 'Tribubble bongo', 'Tribubble bongo', 'Otoh Gunga Bongameken Cooperative', 'unknown', 15, 85, 1, 2, 1600, 'unknown', 'submarine', '2014-12-19T17:37:37.924000Z', '2014-12-22T18:21:15.978000Z');

INSERT INTO people_starships (people, starships) VALUES (1, 12), (1, 22), (10, 48), (9, 12);
INSERT INTO people_vehicles (people, vehicles) VALUES (1, 14), (1, 30), (10, 38);
INSERT INTO people_species (people, species) VALUES (1, 1), (2, 2), (10, 1);
"#;
