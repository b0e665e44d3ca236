//! Plant List Filtering
//!
//! - `criteria`: control values normalised into `FilterCriteria`
//! - `record`: typed `PlantRecord` extraction via `FieldMapping`
//! - `evaluate`: pure item and location-group visibility rules
//!
//! DOM access lives in `crate::page`; nothing here reads the document.

pub mod criteria;
pub mod record;
pub mod evaluate;

pub use criteria::{ControlValues, FilterCriteria, TempDirection, TempThreshold};
pub use record::{has_class, parse_number, FieldMapping, PlantRecord};
pub use evaluate::{check, evaluate, group_visibility, Rejection, Visibility};
