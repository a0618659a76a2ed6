use time::PrimitiveDateTime;

use crate::meals::repo_types::Meal;

/// The two facts about a meal the streak depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietEntry {
    pub timestamp: PrimitiveDateTime,
    pub on_diet: bool,
}

impl From<&Meal> for DietEntry {
    fn from(m: &Meal) -> Self {
        Self {
            timestamp: m.timestamp,
            on_diet: m.on_diet,
        }
    }
}

/// Longest run of consecutive on-diet meals in chronological order.
///
/// Entries sharing a timestamp keep their input order (the sort is stable).
pub fn best_streak(entries: &[DietEntry]) -> usize {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let mut current = 0;
    let mut best = 0;
    for entry in &sorted {
        if entry.on_diet {
            current += 1;
        } else {
            current = 0;
        }
        best = best.max(current);
    }
    best
}
