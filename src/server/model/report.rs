//! Owner-name prep time report.
//!
//! The report is a fixed pipeline over many-side records joined to their owner:
//!
//! 1. **join** each record to its owner
//! 2. **filter** rows whose owner name contains [`OWNER_NAME_PATTERN`]
//!    (case-insensitive) and whose prep time is at least [`MIN_PREP_TIME`]
//! 3. **group** by owner name, computing average prep time and row count
//! 4. **filter** groups whose average is at least [`MIN_AVG_PREP_TIME`]
//! 5. **sort** ascending by average
//! 6. **limit** to [`REPORT_LIMIT`] groups
//! 7. **project** to `{ownerName, avgPrepTime, totalRecipes}`
//!
//! Stages 1 and 2 are pushed down to the store by the repository; stages 3 to 7 run
//! here over the joined rows.

use std::collections::BTreeMap;

use crate::model::report::OwnerPrepTimeDto;

pub const OWNER_NAME_PATTERN: &str = "alue";
pub const MIN_PREP_TIME: f64 = 10.0;
pub const MIN_AVG_PREP_TIME: f64 = 10.0;
pub const REPORT_LIMIT: usize = 3;

/// A single report group.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerPrepTime {
    pub owner_name: String,
    pub avg_prep_time: f64,
    pub total_recipes: u64,
}

impl OwnerPrepTime {
    pub fn into_dto(self) -> OwnerPrepTimeDto {
        OwnerPrepTimeDto {
            owner_name: self.owner_name,
            avg_prep_time: self.avg_prep_time,
            total_recipes: self.total_recipes,
        }
    }
}

/// Runs the group, filter, sort and limit stages over `(owner name, prep time)` rows.
///
/// Ties on the average keep owner-name order so the output is deterministic.
pub fn summarize<I>(rows: I) -> Vec<OwnerPrepTime>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut groups: BTreeMap<String, (f64, u64)> = BTreeMap::new();
    for (owner_name, prep_time) in rows {
        let entry = groups.entry(owner_name).or_insert((0.0, 0));
        entry.0 += prep_time;
        entry.1 += 1;
    }

    let mut report: Vec<OwnerPrepTime> = groups
        .into_iter()
        .map(|(owner_name, (sum, count))| OwnerPrepTime {
            owner_name,
            avg_prep_time: sum / count as f64,
            total_recipes: count,
        })
        .filter(|group| group.avg_prep_time >= MIN_AVG_PREP_TIME)
        .collect();

    // Stable sort keeps the BTreeMap's name order among equal averages.
    report.sort_by(|a, b| a.avg_prep_time.total_cmp(&b.avg_prep_time));
    report.truncate(REPORT_LIMIT);
    report
}
