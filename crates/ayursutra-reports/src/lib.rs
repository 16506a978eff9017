//! Chart series for the admin reports screen.
//!
//! Pure builders over core records: each function takes slices of the
//! records a screen already holds and produces a serializable series for
//! the chart in that panel. No database access happens here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ayursutra_core::{
    classify, AppointmentRecord, DoshaScores, JourneyDay, Patient, PrakritiAssessment, Therapy,
};

/// One labeled point on a bar or pie chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub name: String,
    pub value: u32,
}

/// Headline numbers for the quick-stats row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickStats {
    /// Patients registered in the given month ("YYYY-MM")
    pub patients_this_month: u32,
    /// Appointments already finished
    pub therapies_completed: u32,
    /// Sum of base cost over finished appointments
    pub revenue: f64,
    /// Mean course length in days across patients with a journey
    pub avg_treatment_days: f64,
}

/// Whether an appointment has finished relative to the given clock.
///
/// ISO dates and zero-padded "HH:MM" times compare correctly as strings.
fn is_completed(record: &AppointmentRecord, today: &str, now: &str) -> bool {
    record.date.as_str() < today || (record.date == today && record.end_time.as_str() <= now)
}

/// Sessions per therapy, most used first.
pub fn therapy_usage(
    appointments: &[AppointmentRecord],
    therapies: &[Therapy],
) -> Vec<SeriesPoint> {
    let names: BTreeMap<&str, &str> = therapies
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();

    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for record in appointments {
        if let Some(name) = names.get(record.therapy_id.as_str()) {
            *counts.entry(*name).or_default() += 1;
        }
    }

    let mut series: Vec<SeriesPoint> = counts
        .into_iter()
        .map(|(name, value)| SeriesPoint {
            name: name.to_string(),
            value,
        })
        .collect();
    series.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    series
}

/// How many assessments classified each dosha as primary.
///
/// Always returns the three doshas in Vata, Pitta, Kapha order so the pie
/// chart's segment colors stay stable.
pub fn dosha_distribution(assessments: &[PrakritiAssessment]) -> Vec<SeriesPoint> {
    let mut counts = [0u32; 3];
    for assessment in assessments {
        let scores = DoshaScores {
            vata: assessment.vata_score,
            pitta: assessment.pitta_score,
            kapha: assessment.kapha_score,
        };
        let primary = classify(&scores).primary;
        counts[primary as usize] += 1;
    }

    ["Vata", "Pitta", "Kapha"]
        .iter()
        .zip(counts)
        .map(|(name, value)| SeriesPoint {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Registrations per calendar month ("YYYY-MM"), chronological.
pub fn monthly_registrations(patients: &[Patient]) -> Vec<SeriesPoint> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for patient in patients {
        if patient.created_at.len() >= 7 {
            *counts.entry(patient.created_at[..7].to_string()).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(name, value)| SeriesPoint { name, value })
        .collect()
}

/// Total base cost of appointments that have finished by the given clock.
pub fn completed_revenue(
    appointments: &[AppointmentRecord],
    therapies: &[Therapy],
    today: &str,
    now: &str,
) -> f64 {
    let costs: BTreeMap<&str, f64> = therapies
        .iter()
        .map(|t| (t.id.as_str(), t.base_cost))
        .collect();

    appointments
        .iter()
        .filter(|r| is_completed(r, today, now))
        .filter_map(|r| costs.get(r.therapy_id.as_str()))
        .sum()
}

/// Mean course length: the highest day number per patient, averaged.
pub fn average_treatment_days(journey: &[JourneyDay]) -> f64 {
    let mut longest: BTreeMap<&str, u32> = BTreeMap::new();
    for day in journey {
        let entry = longest.entry(day.patient_id.as_str()).or_default();
        *entry = (*entry).max(day.day_number);
    }

    if longest.is_empty() {
        return 0.0;
    }
    longest.values().map(|d| *d as f64).sum::<f64>() / longest.len() as f64
}

/// Diet preparation counts for the kitchen list, from the day's journey
/// entries.
pub fn kitchen_diet_counts(journey: &[JourneyDay]) -> Vec<SeriesPoint> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for day in journey {
        if let Some(diet) = day.prescribed_diet.as_deref() {
            *counts.entry(diet).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(name, value)| SeriesPoint {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Assemble the quick-stats header for one month and clock position.
pub fn quick_stats(
    patients: &[Patient],
    appointments: &[AppointmentRecord],
    therapies: &[Therapy],
    journey: &[JourneyDay],
    month: &str,
    today: &str,
    now: &str,
) -> QuickStats {
    let patients_this_month = patients
        .iter()
        .filter(|p| p.created_at.starts_with(month))
        .count() as u32;
    let therapies_completed = appointments
        .iter()
        .filter(|r| is_completed(r, today, now))
        .count() as u32;

    QuickStats {
        patients_this_month,
        therapies_completed,
        revenue: completed_revenue(appointments, therapies, today, now),
        avg_treatment_days: average_treatment_days(journey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayursutra_core::{Gender, PatientDraft};

    fn record(date: &str, end: &str, therapy_id: &str) -> AppointmentRecord {
        AppointmentRecord {
            id: uuid_like(date, end),
            date: date.into(),
            start_time: "09:00".into(),
            end_time: end.into(),
            patient_id: "p1".into(),
            therapist_id: "t1".into(),
            therapy_id: therapy_id.into(),
            room_id: "r1".into(),
            status: "scheduled".into(),
            notes: None,
            created_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    fn uuid_like(a: &str, b: &str) -> String {
        format!("{a}-{b}")
    }

    fn patient(name: &str, created_at: &str) -> Patient {
        let mut p = PatientDraft {
            name: name.into(),
            age: Some(40),
            gender: Some(Gender::Female),
            contact: "9876543210".into(),
            ..Default::default()
        }
        .into_patient()
        .unwrap();
        p.created_at = created_at.into();
        p
    }

    #[test]
    fn test_therapy_usage_sorted_by_count() {
        let abhyanga = Therapy::new("Abhyanga".into(), 60, 1500.0);
        let shirodhara = Therapy::new("Shirodhara".into(), 45, 1200.0);
        let appointments = vec![
            record("2025-01-10", "10:00", &abhyanga.id),
            record("2025-01-11", "10:00", &shirodhara.id),
            record("2025-01-12", "10:00", &shirodhara.id),
        ];

        let series = therapy_usage(&appointments, &[abhyanga, shirodhara]);
        assert_eq!(series[0].name, "Shirodhara");
        assert_eq!(series[0].value, 2);
        assert_eq!(series[1].name, "Abhyanga");
    }

    #[test]
    fn test_dosha_distribution_counts_primary() {
        let vata = PrakritiAssessment::new("p1".into(), 72, 40, 20, vec![]);
        let pitta = PrakritiAssessment::new("p2".into(), 30, 65, 20, vec![]);
        let series = dosha_distribution(&[vata, pitta]);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0], SeriesPoint { name: "Vata".into(), value: 1 });
        assert_eq!(series[1], SeriesPoint { name: "Pitta".into(), value: 1 });
        assert_eq!(series[2], SeriesPoint { name: "Kapha".into(), value: 0 });
    }

    #[test]
    fn test_monthly_registrations_chronological() {
        let patients = vec![
            patient("A", "2025-02-03T09:00:00Z"),
            patient("B", "2025-01-20T09:00:00Z"),
            patient("C", "2025-02-14T09:00:00Z"),
        ];

        let series = monthly_registrations(&patients);
        assert_eq!(series[0], SeriesPoint { name: "2025-01".into(), value: 1 });
        assert_eq!(series[1], SeriesPoint { name: "2025-02".into(), value: 2 });
    }

    #[test]
    fn test_revenue_counts_only_finished_sessions() {
        let abhyanga = Therapy::new("Abhyanga".into(), 60, 1500.0);
        let appointments = vec![
            record("2025-01-10", "10:00", &abhyanga.id), // past date
            record("2025-01-15", "10:00", &abhyanga.id), // ended earlier today
            record("2025-01-15", "17:00", &abhyanga.id), // later today
            record("2025-01-20", "10:00", &abhyanga.id), // future
        ];

        let revenue = completed_revenue(&appointments, &[abhyanga], "2025-01-15", "12:00");
        assert_eq!(revenue, 3000.0);
    }

    #[test]
    fn test_average_treatment_days() {
        let mut days = Vec::new();
        for n in 1..=7 {
            days.push(JourneyDay::new("p1".into(), n));
        }
        for n in 1..=10 {
            days.push(JourneyDay::new("p2".into(), n));
        }

        assert_eq!(average_treatment_days(&days), 8.5);
        assert_eq!(average_treatment_days(&[]), 0.0);
    }

    #[test]
    fn test_kitchen_diet_counts() {
        let mut a = JourneyDay::new("p1".into(), 1);
        a.prescribed_diet = Some("Khichdi".into());
        let mut b = JourneyDay::new("p2".into(), 3);
        b.prescribed_diet = Some("Khichdi".into());
        let mut c = JourneyDay::new("p3".into(), 2);
        c.prescribed_diet = Some("Peya (Rice gruel)".into());
        let none = JourneyDay::new("p4".into(), 1);

        let series = kitchen_diet_counts(&[a, b, c, none]);
        assert_eq!(series.len(), 2);
        assert!(series.contains(&SeriesPoint { name: "Khichdi".into(), value: 2 }));
    }

    #[test]
    fn test_quick_stats() {
        let abhyanga = Therapy::new("Abhyanga".into(), 60, 1500.0);
        let patients = vec![
            patient("A", "2025-01-05T09:00:00Z"),
            patient("B", "2024-12-28T09:00:00Z"),
        ];
        let appointments = vec![
            record("2025-01-10", "10:00", &abhyanga.id),
            record("2025-01-20", "10:00", &abhyanga.id),
        ];
        let journey = vec![JourneyDay::new("p1".into(), 5)];

        let stats = quick_stats(
            &patients,
            &appointments,
            &[abhyanga],
            &journey,
            "2025-01",
            "2025-01-15",
            "12:00",
        );
        assert_eq!(stats.patients_this_month, 1);
        assert_eq!(stats.therapies_completed, 1);
        assert_eq!(stats.revenue, 1500.0);
        assert_eq!(stats.avg_treatment_days, 5.0);
    }
}
