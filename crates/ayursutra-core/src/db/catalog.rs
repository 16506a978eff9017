//! Therapy, therapist, and room catalog operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Room, Therapist, Therapy};

fn therapy_from_row(row: &Row<'_>) -> rusqlite::Result<Therapy> {
    Ok(Therapy {
        id: row.get(0)?,
        name: row.get(1)?,
        duration_minutes: row.get(2)?,
        base_cost: row.get(3)?,
        gender_restriction: row.get(4)?,
        description: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn therapist_from_row(row: &Row<'_>) -> rusqlite::Result<Therapist> {
    Ok(Therapist {
        id: row.get(0)?,
        name: row.get(1)?,
        gender: row.get(2)?,
        specialization: row.get(3)?,
        is_active: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        room_number: row.get(1)?,
        room_type: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Database {
    /// Add or update a therapy.
    pub fn upsert_therapy(&self, therapy: &Therapy) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO therapies (id, name, duration_minutes, base_cost, gender_restriction, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                duration_minutes = excluded.duration_minutes,
                base_cost = excluded.base_cost,
                gender_restriction = excluded.gender_restriction,
                description = excluded.description
            "#,
            params![
                therapy.id,
                therapy.name,
                therapy.duration_minutes,
                therapy.base_cost,
                therapy.gender_restriction,
                therapy.description,
                therapy.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get a therapy by ID.
    pub fn get_therapy(&self, id: &str) -> DbResult<Option<Therapy>> {
        self.conn
            .query_row(
                "SELECT id, name, duration_minutes, base_cost, gender_restriction, description, created_at
                 FROM therapies WHERE id = ?",
                [id],
                therapy_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all therapies, alphabetically.
    pub fn list_therapies(&self) -> DbResult<Vec<Therapy>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, duration_minutes, base_cost, gender_restriction, description, created_at
             FROM therapies ORDER BY name",
        )?;
        let therapies = stmt
            .query_map([], therapy_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(therapies)
    }

    /// Add or update a therapist.
    pub fn upsert_therapist(&self, therapist: &Therapist) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO therapists (id, name, gender, specialization, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                gender = excluded.gender,
                specialization = excluded.specialization,
                is_active = excluded.is_active
            "#,
            params![
                therapist.id,
                therapist.name,
                therapist.gender,
                therapist.specialization,
                therapist.is_active,
                therapist.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get a therapist by ID.
    pub fn get_therapist(&self, id: &str) -> DbResult<Option<Therapist>> {
        self.conn
            .query_row(
                "SELECT id, name, gender, specialization, is_active, created_at
                 FROM therapists WHERE id = ?",
                [id],
                therapist_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List therapists currently taking appointments.
    pub fn list_active_therapists(&self) -> DbResult<Vec<Therapist>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, gender, specialization, is_active, created_at
             FROM therapists WHERE is_active = 1 ORDER BY name",
        )?;
        let therapists = stmt
            .query_map([], therapist_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(therapists)
    }

    /// Add or update a room.
    pub fn upsert_room(&self, room: &Room) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO rooms (id, room_number, type, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                room_number = excluded.room_number,
                type = excluded.type,
                status = excluded.status
            "#,
            params![
                room.id,
                room.room_number,
                room.room_type,
                room.status,
                room.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get a room by ID.
    pub fn get_room(&self, id: &str) -> DbResult<Option<Room>> {
        self.conn
            .query_row(
                "SELECT id, room_number, type, status, created_at FROM rooms WHERE id = ?",
                [id],
                room_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all rooms by number.
    pub fn list_rooms(&self) -> DbResult<Vec<Room>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, room_number, type, status, created_at FROM rooms ORDER BY room_number",
        )?;
        let rooms = stmt
            .query_map([], room_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rooms)
    }
}
