//! Hero Entity

use chrono::NaiveDateTime;
use kernel::id::HeroId;
use serde::Serialize;

/// Heroes every fresh store starts with: (name, role, difficulty)
pub const DEFAULT_HEROES: [(&str, &str, &str); 3] = [
    ("Alucard", "Fighter", "Mudah"),
    ("Miya", "Marksman", "Mudah"),
    ("Fanny", "Assassin", "Sulit"),
];

/// Hero entity
///
/// Timestamps have no offset; they mirror a `TIMESTAMP` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub role: String,
    pub difficulty: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
