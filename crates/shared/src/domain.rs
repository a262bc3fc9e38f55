use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(ChefId, String);
id_newtype!(SubmissionId, Uuid);

impl ChefId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SubmissionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingOption {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewer: String,
    /// Star glyphs as displayed, e.g. `★★★★☆`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// One chef profile as served by the chef API and shipped in the static
/// baseline. Fields the type does not model are kept in `extra` and written
/// back out unchanged.
///
/// Decoding is lenient: `null` reads as an empty value, ids and numbers may
/// arrive as strings or numbers, and `id` is accepted in place of `chefId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ChefRecordWire")]
pub struct ChefRecord {
    #[serde(rename = "chefId")]
    pub id: Option<ChefId>,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    pub description: String,
    pub specialties: Vec<String>,
    pub dietary_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    pub pricing: Vec<PricingOption>,
    pub menu_options: BTreeMap<String, Vec<String>>,
    pub reviews: Vec<Review>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChefRecordWire {
    #[serde(default)]
    chef_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    cuisine: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    profile_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    specialties: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    dietary_tags: Vec<String>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    review_count: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pricing: Vec<PricingOption>,
    #[serde(default, deserialize_with = "null_as_default")]
    menu_options: BTreeMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    reviews: Vec<Review>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<ChefRecordWire> for ChefRecord {
    fn from(wire: ChefRecordWire) -> Self {
        let mut extra = wire.extra;
        // `chefId` wins; a client-side `id` next to it is kept verbatim.
        let id = match (wire.chef_id.and_then(id_from_value), wire.id) {
            (Some(chef_id), Some(raw)) => {
                extra.insert("id".to_string(), raw);
                Some(chef_id)
            }
            (Some(chef_id), None) => Some(chef_id),
            (None, raw) => raw.and_then(id_from_value),
        };

        Self {
            id,
            name: wire.name,
            location: wire.location,
            cuisine: wire.cuisine,
            image_url: wire.image_url,
            profile_url: wire.profile_url,
            description: wire.description,
            specialties: wire.specialties,
            dietary_tags: wire.dietary_tags,
            rating: wire.rating.as_ref().and_then(number_from_value),
            review_count: wire
                .review_count
                .as_ref()
                .and_then(number_from_value)
                .filter(|count| *count >= 0.0)
                .map(|count| count.min(f64::from(u32::MAX)) as u32),
            pricing: wire.pricing,
            menu_options: wire.menu_options,
            reviews: wire.reviews,
            extra,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_from_value(value: Value) -> Option<ChefId> {
    match value {
        Value::String(text) if !text.is_empty() => Some(ChefId(text)),
        Value::Number(number) => Some(ChefId(number.to_string())),
        _ => None,
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

impl ChefRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(ChefId::new(id));
        self
    }

    /// Dietary tags joined with `,`, in order.
    pub fn dietary_line(&self) -> String {
        self.dietary_tags.join(",")
    }
}
