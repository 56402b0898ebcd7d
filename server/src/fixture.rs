//! Seed rows loaded into a fresh repository.

use chrono::{DateTime, Utc};

use crate::model::Client;

const ROWS: &[(i64, &str, &str, f64, &str, u32)] = &[
    (1, "Conceição Evaristo", "10619244881", 1500.0, "2020-07-13T20:50:00Z", 2),
    (2, "Lázaro Ramos", "10619244881", 2500.0, "1996-12-23T07:00:00Z", 2),
    (3, "Clarice Lispector", "10919444522", 3800.0, "1960-04-13T07:50:00Z", 2),
    (4, "Carolina Maria de Jesus", "10419244771", 7500.0, "1996-12-23T07:00:00Z", 0),
    (5, "Gilberto Gil", "10419344882", 2500.0, "1949-05-05T07:00:00Z", 4),
    (6, "Djamila Ribeiro", "10619244884", 4500.0, "1975-11-10T07:00:00Z", 1),
    (7, "Jose Saramago", "10239254871", 5000.0, "1996-12-23T07:00:00Z", 0),
    (8, "Toni Morrison", "10219344681", 10000.0, "1940-02-23T07:00:00Z", 0),
    (9, "Yuval Noah Harari", "10619244881", 1500.0, "1956-09-23T07:00:00Z", 2),
    (10, "Chimamanda Adichie", "10114274861", 1500.0, "1956-09-23T07:00:00Z", 2),
    (11, "Silvio Almeida", "10164334861", 4300.0, "1976-08-17T07:00:00Z", 3),
    (12, "Jorge Amado", "10204374161", 1300.0, "1912-08-10T07:00:00Z", 2),
];

/// The twelve clients every seeded repository starts with, ordered by id.
pub fn clients() -> Vec<Client> {
    ROWS.iter()
        .map(|&(id, name, cpf, income, birth_date, children)| Client {
            id,
            name: name.to_string(),
            cpf: cpf.to_string(),
            income,
            birth_date: parse_instant(birth_date),
            children,
        })
        .collect()
}

fn parse_instant(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}
