use crate::error::{HeroError, HeroResult};

/// The client-editable fields of a hero, all non-empty
///
/// Only the empty string is rejected; whitespace is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroAttributes {
    name: String,
    role: String,
    difficulty: String,
}

impl HeroAttributes {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> HeroResult<Self> {
        let (name, role, difficulty) = (name.into(), role.into(), difficulty.into());

        if name.is_empty() || role.is_empty() || difficulty.is_empty() {
            return Err(HeroError::MissingFields);
        }

        Ok(Self {
            name,
            role,
            difficulty,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[inline]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }
}
