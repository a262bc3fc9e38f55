use shared::domain::ChefRecord;

/// Locality names a location search is checked against.
pub const KNOWN_LOCALITIES: &[&str] = &[
    "california",
    "ca",
    "san jose",
    "san francisco",
    "los angeles",
    "la",
    "sacramento",
    "fresno",
    "bakersfield",
];

/// Search box values. Blank or missing values impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub cuisine: Option<String>,
    pub dietary: Option<String>,
}

impl SearchCriteria {
    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.location = Some(value.into());
        self
    }

    pub fn cuisine(mut self, value: impl Into<String>) -> Self {
        self.cuisine = Some(value.into());
        self
    }

    pub fn dietary(mut self, value: impl Into<String>) -> Self {
        self.dietary = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        active(&self.location).is_none()
            && active(&self.cuisine).is_none()
            && active(&self.dietary).is_none()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if let Some(location) = active(&self.location) {
            if !location_known(&location) {
                return false;
            }
        }
        if let Some(cuisine) = active(&self.cuisine) {
            if item.cuisine().to_lowercase() != cuisine {
                return false;
            }
        }
        if let Some(dietary) = active(&self.dietary) {
            if !item.dietary().to_lowercase().contains(&dietary) {
                return false;
            }
        }
        true
    }
}

/// The fields a search looks at.
pub trait Searchable {
    fn cuisine(&self) -> &str;
    /// Comma-joined dietary tags.
    fn dietary(&self) -> String;
}

impl Searchable for ChefRecord {
    fn cuisine(&self) -> &str {
        &self.cuisine
    }

    fn dietary(&self) -> String {
        self.dietary_line()
    }
}

/// Stable, order-preserving filter. Every active rule must hold.
pub fn filter_chefs<T: Searchable + Clone>(records: &[T], criteria: &SearchCriteria) -> Vec<T> {
    records
        .iter()
        .filter(|record| criteria.matches(*record))
        .cloned()
        .collect()
}

fn active(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

// Checked against the locality list, not the record's own location.
fn location_known(criterion: &str) -> bool {
    KNOWN_LOCALITIES
        .iter()
        .any(|known| known.contains(criterion) || criterion.contains(known))
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
