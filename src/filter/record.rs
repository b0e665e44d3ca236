//! Plant List Records
//!
//! Each `plant_list_item` is read once per pass into a typed `PlantRecord`.
//! Which child class feeds which field is declared in `FieldMapping`, so
//! extraction is a table lookup rather than a chain of class comparisons.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Child class name for each record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub name: String,
    pub species: String,
    pub location: String,
    pub temp_max: String,
    pub temp_min: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name: "plant_link".to_string(),
            species: "species_link".to_string(),
            location: "location_name".to_string(),
            temp_max: "temp_max".to_string(),
            temp_min: "temp_min".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Species,
    Location,
    TempMax,
    TempMin,
}

impl FieldMapping {
    fn field_for(&self, class_attr: &str) -> Option<Field> {
        let table = [
            (self.name.as_str(), Field::Name),
            (self.species.as_str(), Field::Species),
            (self.location.as_str(), Field::Location),
            (self.temp_max.as_str(), Field::TempMax),
            (self.temp_min.as_str(), Field::TempMin),
        ];
        table
            .iter()
            .find(|(class, _)| has_class(class_attr, class))
            .map(|(_, field)| *field)
    }
}

/// Whitespace-separated class attribute contains `class`
pub fn has_class(class_attr: &str, class: &str) -> bool {
    !class.is_empty() && class_attr.split_whitespace().any(|c| c == class)
}

/// Numeric text as a browser would coerce it
///
/// Surrounding whitespace is ignored, blank text is 0 and anything
/// unparsable is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts these spellings, browsers do not
        t if t.eq_ignore_ascii_case("inf")
            || t.eq_ignore_ascii_case("+inf")
            || t.eq_ignore_ascii_case("-inf")
            || t.eq_ignore_ascii_case("infinity")
            || t.eq_ignore_ascii_case("nan") =>
        {
            f64::NAN
        }
        t => match radix_prefix(t) {
            Some((radix, digits)) => parse_radix(digits, radix),
            None => t.parse::<f64>().unwrap_or(f64::NAN),
        },
    }
}

/// `0x`, `0o` and `0b` literals; browsers reject a sign in front of them
fn radix_prefix(text: &str) -> Option<(u32, &str)> {
    let prefix = text.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
        .unwrap_or(f64::NAN)
}

/// One plant list entry, text fields lower-cased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub name: String,
    pub species: Option<String>,
    pub location: Option<String>,
    /// NaN when the field is missing or not numeric
    pub temp_max: f64,
    pub temp_min: f64,
}

impl PlantRecord {
    pub fn new(name: &str, species: Option<&str>, location: Option<&str>, temp_max: f64, temp_min: f64) -> Self {
        Self {
            name: name.to_lowercase(),
            species: species.map(str::to_lowercase),
            location: location.map(str::to_lowercase),
            temp_max,
            temp_min,
        }
    }

    /// Build from `(class attribute, text content)` pairs of an item's children
    ///
    /// `item` is the item's position in the list, used for error reporting.
    /// Unmapped children are ignored; the first child claiming a field wins.
    pub fn extract<I, C, T>(item: usize, children: I, mapping: &FieldMapping) -> Result<Self>
    where
        I: IntoIterator<Item = (C, T)>,
        C: AsRef<str>,
        T: AsRef<str>,
    {
        let mut name = None;
        let mut species = None;
        let mut location = None;
        let mut temp_max = None;
        let mut temp_min = None;

        for (class_attr, text) in children {
            let text = text.as_ref();
            match mapping.field_for(class_attr.as_ref()) {
                Some(Field::Name) => {
                    name.get_or_insert_with(|| text.to_lowercase());
                }
                Some(Field::Species) => {
                    species.get_or_insert_with(|| text.to_lowercase());
                }
                Some(Field::Location) => {
                    location.get_or_insert_with(|| text.to_lowercase());
                }
                Some(Field::TempMax) => {
                    temp_max.get_or_insert_with(|| parse_number(text));
                }
                Some(Field::TempMin) => {
                    temp_min.get_or_insert_with(|| parse_number(text));
                }
                None => {}
            }
        }

        let name = name.ok_or_else(|| UiError::MissingField {
            item,
            class: mapping.name.clone(),
        })?;

        Ok(Self {
            name,
            species,
            location,
            temp_max: temp_max.unwrap_or(f64::NAN),
            temp_min: temp_min.unwrap_or(f64::NAN),
        })
    }
}
