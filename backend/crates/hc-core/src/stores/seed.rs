//! Records the stores start with.

use crate::{
    Application, ApplicationStatus, Child, HistoryEntry, HistoryKind, HistoryStatus, Sponsorship,
    SponsorshipStatus,
};

use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn child(id: &str, name: &str, age: u8, description: &str) -> Child {
    Child {
        id: id.to_string(),
        name: name.to_string(),
        age,
        description: description.to_string(),
        sponsored: false,
        sponsor_name: None,
        sponsorship_date: None,
    }
}

pub(crate) fn children() -> Vec<Child> {
    vec![
        child("1", "María", 7, "Ama aprender y sueña con ser maestra."),
        child("2", "Carlos", 9, "Curioso y lector, sueña con ser médico."),
        child("3", "Sofía", 6, "Le encanta pintar y sueña con ser artista."),
        child("4", "Juan", 8, "Deportista y trabajador, juega fútbol."),
        child("5", "Ana", 10, "Responsable y dedicada, toca la flauta."),
        child("6", "Luis", 7, "Le fascina la naturaleza, sueña con ser veterinario."),
    ]
}

fn application(id: &str, name: &str, email: &str, phone: &str, document: &str, on: NaiveDate) -> Application {
    Application {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        document: document.to_string(),
        date: on,
        status: ApplicationStatus::Pending,
    }
}

pub(crate) fn applications() -> Vec<Application> {
    vec![
        application(
            "1",
            "Juan Pérez",
            "juan.perez@email.com",
            "+57 300 123 4567",
            "123456789",
            date(2025, 1, 15),
        ),
        application(
            "2",
            "María García",
            "maria.garcia@email.com",
            "+57 301 234 5678",
            "987654321",
            date(2025, 1, 10),
        ),
        application(
            "3",
            "Carlos Rodríguez",
            "carlos.rodriguez@email.com",
            "+57 302 345 6789",
            "456789123",
            date(2025, 1, 5),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sponsorship(
    id: &str,
    child_name: &str,
    child_age: u8,
    sponsor_name: &str,
    sponsor_email: &str,
    start_date: NaiveDate,
    monthly_amount: u64,
    total_donated: u64,
) -> Sponsorship {
    Sponsorship {
        id: id.to_string(),
        child_name: child_name.to_string(),
        child_age,
        sponsor_name: sponsor_name.to_string(),
        sponsor_email: sponsor_email.to_string(),
        start_date,
        monthly_amount,
        total_donated,
        status: SponsorshipStatus::Active,
    }
}

pub(crate) fn sponsorships() -> Vec<Sponsorship> {
    vec![
        sponsorship("1", "María", 7, "Juan Pérez", "juan.perez@email.com", date(2024, 6, 15), 50_000, 350_000),
        sponsorship("2", "Carlos", 9, "María García", "maria.garcia@email.com", date(2024, 8, 20), 100_000, 500_000),
        sponsorship("3", "Sofía", 6, "Carlos Rodríguez", "carlos.rodriguez@email.com", date(2024, 9, 10), 30_000, 120_000),
        sponsorship("4", "Juan", 8, "Ana Martínez", "ana.martinez@email.com", date(2024, 7, 5), 50_000, 300_000),
        sponsorship("5", "Ana", 10, "Luis Fernández", "luis.fernandez@email.com", date(2024, 10, 1), 50_000, 150_000),
    ]
}

pub(crate) fn history() -> Vec<HistoryEntry> {
    let sponsorship = |id: &str, child: &str, on: NaiveDate, amount: u64| HistoryEntry {
        id: id.to_string(),
        kind: HistoryKind::Sponsorship,
        child_name: Some(child.to_string()),
        date: on,
        amount,
        status: HistoryStatus::Active,
    };
    let donation = |id: &str, on: NaiveDate, amount: u64| HistoryEntry {
        id: id.to_string(),
        kind: HistoryKind::Donation,
        child_name: None,
        date: on,
        amount,
        status: HistoryStatus::Completed,
    };

    vec![
        sponsorship("1", "María", date(2024, 6, 15), 50_000),
        donation("2", date(2025, 1, 15), 50_000),
        sponsorship("3", "Carlos", date(2024, 9, 20), 100_000),
        donation("4", date(2024, 12, 15), 30_000),
        donation("5", date(2024, 11, 15), 50_000),
    ]
}
