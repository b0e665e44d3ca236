//! Filter Evaluation
//!
//! Pure visibility rules. An item is visible only when it passes every
//! active predicate; a location group is hidden only when all of its items
//! are hidden.

use serde::{Deserialize, Serialize};

use super::criteria::FilterCriteria;
use super::record::PlantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn from_bool(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Which predicate rejected an item (first failure in evaluation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    Name,
    Species,
    Location,
    TempMax,
    TempMin,
}

/// Run every predicate, reporting the first one that fails
pub fn check(record: &PlantRecord, criteria: &FilterCriteria) -> Result<(), Rejection> {
    if !record.name.contains(&criteria.name) {
        return Err(Rejection::Name);
    }

    // A plant without a species can only pass an empty species filter
    let species_ok = match &record.species {
        Some(species) => species.contains(&criteria.species),
        None => criteria.species.is_empty(),
    };
    if !species_ok {
        return Err(Rejection::Species);
    }

    if let Some(wanted) = &criteria.location {
        let location_ok = record
            .location
            .as_ref()
            .map_or(false, |location| location.contains(wanted.as_str()));
        if !location_ok {
            return Err(Rejection::Location);
        }
    }

    if let Some(threshold) = &criteria.temp_max {
        if !threshold.admits(record.temp_max) {
            return Err(Rejection::TempMax);
        }
    }

    if let Some(threshold) = &criteria.temp_min {
        if !threshold.admits(record.temp_min) {
            return Err(Rejection::TempMin);
        }
    }

    Ok(())
}

pub fn evaluate(record: &PlantRecord, criteria: &FilterCriteria) -> Visibility {
    Visibility::from_bool(check(record, criteria).is_ok())
}

/// Group visibility from its non-header children
///
/// An empty group is hidden.
pub fn group_visibility<I>(children: I) -> Visibility
where
    I: IntoIterator<Item = Visibility>,
{
    Visibility::from_bool(children.into_iter().any(Visibility::is_visible))
}
