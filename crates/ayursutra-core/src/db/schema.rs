//! SQLite schema definition.

/// Complete database schema for the ayursutra store.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL,
    contact TEXT NOT NULL,
    abha_id TEXT,
    blood_group TEXT,
    address TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

-- ============================================================================
-- Therapy / Therapist / Room catalog
-- ============================================================================

CREATE TABLE IF NOT EXISTS therapies (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL,
    base_cost REAL NOT NULL,
    gender_restriction INTEGER NOT NULL DEFAULT 0,
    description TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS therapists (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    specialization TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS rooms (
    id TEXT PRIMARY KEY,
    room_number TEXT NOT NULL,
    type TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'available',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Appointments (create-only in the booking flow)
-- ============================================================================

CREATE TABLE IF NOT EXISTS appointments (
    id TEXT PRIMARY KEY,
    date TEXT NOT NULL,                           -- ISO "YYYY-MM-DD"
    start_time TEXT NOT NULL,                     -- "HH:MM"
    end_time TEXT NOT NULL,                       -- "HH:MM"
    patient_id TEXT NOT NULL REFERENCES patients(id),
    therapist_id TEXT NOT NULL REFERENCES therapists(id),
    therapy_id TEXT NOT NULL REFERENCES therapies(id),
    room_id TEXT NOT NULL REFERENCES rooms(id),
    status TEXT NOT NULL DEFAULT 'scheduled',
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Constraint backstop for the conflict rules: a room or therapist can hold
-- only one appointment per exact (date, start_time) slot.
CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_room_slot
    ON appointments(date, start_time, room_id);
CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_therapist_slot
    ON appointments(date, start_time, therapist_id);

CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);
CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date);

-- ============================================================================
-- Prakriti assessments
-- ============================================================================

CREATE TABLE IF NOT EXISTS prakriti_assessments (
    id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL REFERENCES patients(id),
    vata_score INTEGER NOT NULL,
    pitta_score INTEGER NOT NULL,
    kapha_score INTEGER NOT NULL,
    responses TEXT NOT NULL DEFAULT '[]',         -- JSON array of trait ids
    assessment_date TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_assessments_patient ON prakriti_assessments(patient_id);

-- ============================================================================
-- Inventory
-- ============================================================================

CREATE TABLE IF NOT EXISTS inventory (
    id TEXT PRIMARY KEY,
    item_name TEXT NOT NULL,
    category TEXT NOT NULL,
    quantity REAL NOT NULL DEFAULT 0,
    unit TEXT NOT NULL,
    min_stock_level REAL NOT NULL DEFAULT 15,
    cost_per_unit REAL,
    supplier TEXT,
    last_restocked_at TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_inventory_name ON inventory(item_name);

-- ============================================================================
-- Treatment journey and vitals
-- ============================================================================

CREATE TABLE IF NOT EXISTS treatment_journey (
    id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL REFERENCES patients(id),
    day_number INTEGER NOT NULL,
    therapy_id TEXT REFERENCES therapies(id),
    session_completed INTEGER NOT NULL DEFAULT 0,
    prescribed_diet TEXT,
    notes TEXT,
    completed_at TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_journey_patient ON treatment_journey(patient_id);

CREATE TABLE IF NOT EXISTS vitals (
    id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL REFERENCES patients(id),
    day_number INTEGER NOT NULL,
    pulse INTEGER,
    bp_systolic INTEGER,
    bp_diastolic INTEGER,
    appetite TEXT,
    notes TEXT,
    recorded_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_vitals_patient ON vitals(patient_id);
"#;
