use serde::{Deserialize, Serialize};

/// Candidate record as delivered by the remote roster API.
///
/// All fields arrive string-typed; `image` may be empty, in which case the
/// renderer substitutes the configured placeholder asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aspirant {
    pub id: String,
    pub name: String,
    pub species: String,
    pub house: String,
    pub patronus: String,
    #[serde(default)]
    pub image: String,
}

impl Aspirant {
    /// Image to render, falling back to the placeholder when the record
    /// carries none.
    pub fn image_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.image.trim().is_empty() {
            default
        } else {
            &self.image
        }
    }
}

/// Presentation lifecycle of the fetch operation. Controls only which
/// placeholder the table shows, never data correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    #[default]
    Empty,
    Charging,
    Done,
}

impl ViewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Charging => "loading",
            Self::Done => "done",
        }
    }
}

/// Active name and house filters, stored pre-normalized.
///
/// Both match by case-insensitive substring containment; an empty filter
/// matches everything. House matching is substring, not exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilters {
    name: String,
    house: String,
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl RosterFilters {
    pub fn set_name(&mut self, raw: &str) {
        self.name = normalize(raw);
    }

    pub fn set_house(&mut self, raw: &str) {
        self.house = normalize(raw);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn house(&self) -> &str {
        &self.house
    }

    pub fn matches(&self, aspirant: &Aspirant) -> bool {
        (self.house.is_empty() || aspirant.house.to_lowercase().contains(&self.house))
            && (self.name.is_empty() || aspirant.name.to_lowercase().contains(&self.name))
    }
}
