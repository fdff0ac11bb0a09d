//! Persistence service: writes synced flights to Postgres.
//!
//! DESIGN
//! ======
//! Each successful sync upserts its batch into `live_flights` keyed by
//! `icao24`, then records the checkpoint, all in one transaction. Rows for
//! aircraft that vanished upstream are left in place; the in-memory store is
//! the live view, the table is the accumulated history of last sightings.
//!
//! ERROR HANDLING
//! ==============
//! A failed write rolls back the whole batch, including the checkpoint, so
//! the table never claims a sync it does not contain.

use flights::{FlightRecord, SyncCheckpoint};
use sqlx::{PgPool, Postgres, Transaction};
use time::OffsetDateTime;

const UPSERT_FLIGHT_SQL: &str = "INSERT INTO live_flights (\
         icao24, callsign, origin_country, time_position, last_contact, longitude, latitude, \
         baro_altitude, on_ground, velocity, true_track, vertical_rate, geo_altitude, squawk, spi, \
         position_source, category, updated_at) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, now()) \
     ON CONFLICT (icao24) DO UPDATE SET \
         callsign = EXCLUDED.callsign, origin_country = EXCLUDED.origin_country, \
         time_position = EXCLUDED.time_position, last_contact = EXCLUDED.last_contact, \
         longitude = EXCLUDED.longitude, latitude = EXCLUDED.latitude, \
         baro_altitude = EXCLUDED.baro_altitude, on_ground = EXCLUDED.on_ground, \
         velocity = EXCLUDED.velocity, true_track = EXCLUDED.true_track, \
         vertical_rate = EXCLUDED.vertical_rate, geo_altitude = EXCLUDED.geo_altitude, \
         squawk = EXCLUDED.squawk, spi = EXCLUDED.spi, \
         position_source = EXCLUDED.position_source, category = EXCLUDED.category, \
         updated_at = now()";

const SAVE_CHECKPOINT_SQL: &str = "INSERT INTO sync_checkpoint (id, synced_at, source_time, flight_count, skipped, runs) \
     VALUES (1, $1, $2, $3, $4, $5) \
     ON CONFLICT (id) DO UPDATE SET \
         synced_at = EXCLUDED.synced_at, source_time = EXCLUDED.source_time, \
         flight_count = EXCLUDED.flight_count, skipped = EXCLUDED.skipped, runs = EXCLUDED.runs";

/// Upsert a batch and its checkpoint atomically.
///
/// # Errors
///
/// Returns the first database error; the transaction is rolled back on drop.
pub async fn persist_batch(
    pool: &PgPool,
    records: &[FlightRecord],
    checkpoint: &SyncCheckpoint,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    upsert_flights(&mut tx, records).await?;
    save_checkpoint(&mut tx, checkpoint).await?;
    tx.commit().await
}

async fn upsert_flights(tx: &mut Transaction<'_, Postgres>, records: &[FlightRecord]) -> Result<(), sqlx::Error> {
    for rec in records {
        sqlx::query(UPSERT_FLIGHT_SQL)
            .bind(&rec.icao24)
            .bind(&rec.callsign)
            .bind(&rec.origin_country)
            .bind(rec.time_position)
            .bind(rec.last_contact)
            .bind(rec.longitude)
            .bind(rec.latitude)
            .bind(rec.baro_altitude)
            .bind(rec.on_ground)
            .bind(rec.velocity)
            .bind(rec.true_track)
            .bind(rec.vertical_rate)
            .bind(rec.geo_altitude)
            .bind(&rec.squawk)
            .bind(rec.spi)
            .bind(rec.position_source)
            .bind(rec.category)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn save_checkpoint(tx: &mut Transaction<'_, Postgres>, checkpoint: &SyncCheckpoint) -> Result<(), sqlx::Error> {
    sqlx::query(SAVE_CHECKPOINT_SQL)
        .bind(checkpoint.synced_at.unwrap_or_else(OffsetDateTime::now_utc))
        .bind(checkpoint.source_time)
        .bind(count_to_i64(checkpoint.flight_count))
        .bind(count_to_i64(checkpoint.skipped))
        .bind(i64::try_from(checkpoint.runs).unwrap_or(i64::MAX))
        .execute(&mut **tx)
        .await?;
    Ok(())
}

fn count_to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
