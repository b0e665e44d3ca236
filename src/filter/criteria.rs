//! Filter Criteria
//!
//! Raw control values are read once per filter pass and normalised into a
//! `FilterCriteria` value. Everything downstream works on this value and
//! never looks at the controls again.

use serde::{Deserialize, Serialize};

use super::record::parse_number;

/// Raw strings as they sit in the filter controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlValues {
    pub name: String,
    pub species: String,
    /// `None` when the page has no location control
    pub location: Option<String>,
    pub max_temp: String,
    pub max_temp_direction: String,
    pub min_temp: String,
    pub min_temp_direction: String,
}

/// Which side of the threshold passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempDirection {
    /// `+`: the plant's value must be at least the threshold
    AtLeast,
    /// `-`: the plant's value must be at most the threshold
    AtMost,
}

impl TempDirection {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag.trim() {
            "+" => Some(TempDirection::AtLeast),
            "-" => Some(TempDirection::AtMost),
            _ => None,
        }
    }
}

/// A numeric bound on one temperature field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempThreshold {
    pub value: f64,
    pub direction: TempDirection,
}

impl TempThreshold {
    /// Build from the threshold text and its direction flag
    ///
    /// Returns `None` when the text is blank or the flag is neither `+` nor
    /// `-`. Non-numeric text yields a NaN threshold, which no plant passes.
    pub fn parse(raw_value: &str, raw_direction: &str) -> Option<Self> {
        if raw_value.trim().is_empty() {
            return None;
        }
        let direction = TempDirection::from_flag(raw_direction)?;
        Some(Self {
            value: parse_number(raw_value),
            direction,
        })
    }

    /// NaN on either side fails
    pub fn admits(&self, plant_value: f64) -> bool {
        match self.direction {
            TempDirection::AtLeast => plant_value >= self.value,
            TempDirection::AtMost => plant_value <= self.value,
        }
    }
}

/// Normalised filter state for one pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Lower-cased name substring
    pub name: String,
    /// Lower-cased species substring
    pub species: String,
    /// Lower-cased location substring, `None` when the page has no control
    pub location: Option<String>,
    pub temp_max: Option<TempThreshold>,
    pub temp_min: Option<TempThreshold>,
}

impl FilterCriteria {
    pub fn from_controls(controls: &ControlValues) -> Self {
        Self {
            name: controls.name.to_lowercase(),
            species: controls.species.to_lowercase(),
            location: controls.location.as_ref().map(|l| l.to_lowercase()),
            temp_max: TempThreshold::parse(&controls.max_temp, &controls.max_temp_direction),
            temp_min: TempThreshold::parse(&controls.min_temp, &controls.min_temp_direction),
        }
    }

    /// Builder-style helpers, mostly for tests and the preview binary
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_lowercase();
        self
    }

    pub fn with_species(mut self, species: &str) -> Self {
        self.species = species.to_lowercase();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_lowercase());
        self
    }

    pub fn with_temp_max(mut self, value: f64, direction: TempDirection) -> Self {
        self.temp_max = Some(TempThreshold { value, direction });
        self
    }

    pub fn with_temp_min(mut self, value: f64, direction: TempDirection) -> Self {
        self.temp_min = Some(TempThreshold { value, direction });
        self
    }

    /// True when no control narrows the list
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.species.is_empty()
            && self.location.as_deref().map_or(true, str::is_empty)
            && self.temp_max.is_none()
            && self.temp_min.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controls() -> ControlValues {
        ControlValues {
            max_temp_direction: "+".to_string(),
            min_temp_direction: "+".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_controls_are_empty() {
        let criteria = FilterCriteria::from_controls(&controls());
        assert!(criteria.is_empty());
        assert_eq!(criteria.location, None);
    }

    #[test]
    fn test_text_is_lowercased() {
        let mut raw = controls();
        raw.name = "FeR".to_string();
        raw.species = "Boston".to_string();
        raw.location = Some("DEN".to_string());
        let criteria = FilterCriteria::from_controls(&raw);
        assert_eq!(criteria.name, "fer");
        assert_eq!(criteria.species, "boston");
        assert_eq!(criteria.location.as_deref(), Some("den"));
    }

    #[test]
    fn test_both_thresholds_are_numeric() {
        let mut raw = controls();
        raw.max_temp = "40".to_string();
        raw.max_temp_direction = "-".to_string();
        raw.min_temp = " 7.5 ".to_string();
        let criteria = FilterCriteria::from_controls(&raw);

        let max = criteria.temp_max.unwrap();
        assert_eq!(max.direction, TempDirection::AtMost);
        assert_relative_eq!(max.value, 40.0);

        let min = criteria.temp_min.unwrap();
        assert_eq!(min.direction, TempDirection::AtLeast);
        assert_relative_eq!(min.value, 7.5);
    }

    #[test]
    fn test_unknown_direction_disables_threshold() {
        assert!(TempThreshold::parse("10", "~").is_none());
        assert!(TempThreshold::parse("10", "").is_none());
    }

    #[test]
    fn test_non_numeric_threshold_admits_nothing() {
        let threshold = TempThreshold::parse("warm", "+").unwrap();
        assert!(threshold.value.is_nan());
        assert!(!threshold.admits(100.0));
        assert!(!threshold.admits(-100.0));
    }

    #[test]
    fn test_admits_is_inclusive() {
        let at_least = TempThreshold { value: 10.0, direction: TempDirection::AtLeast };
        assert!(at_least.admits(10.0));
        assert!(at_least.admits(11.0));
        assert!(!at_least.admits(9.9));

        let at_most = TempThreshold { value: 10.0, direction: TempDirection::AtMost };
        assert!(at_most.admits(10.0));
        assert!(!at_most.admits(10.1));
        assert!(!at_most.admits(f64::NAN));
    }
}
