//! Endpoint catalog for the drink API.
//!
//! Typed counterparts of the raw [`Endpoint`] descriptors the browsing
//! screens use: the home sections (random, latest, popular) plus search,
//! lookup, and ingredient filtering.

use serde_json::json;

use crate::endpoint::{Endpoint, Parameters};

/// Production base address. The wire layout is
/// `{BASE_URL}/{api_key}/{path}`.
pub const BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1";

/// Public demo key accepted by the API for development use.
pub const DEMO_API_KEY: &str = "1";

/// One call against the drink API.
#[derive(Debug, Clone)]
pub enum DrinkEndpoint {
    /// A single random drink.
    Random,
    /// Most recently added drinks.
    Latest,
    /// Most popular drinks.
    Popular,
    /// Search drinks by name.
    Search { name: String },
    /// Full details for one drink by its identifier.
    Lookup { id: String },
    /// Drinks containing the given ingredient.
    FilterByIngredient { ingredient: String },
}

impl DrinkEndpoint {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Random => Endpoint::get(BASE_URL, "random.php"),
            Self::Latest => Endpoint::get(BASE_URL, "latest.php"),
            Self::Popular => Endpoint::get(BASE_URL, "popular.php"),
            Self::Search { name } => {
                Endpoint::get_with(BASE_URL, "search.php", single("s", name))
            }
            Self::Lookup { id } => Endpoint::get_with(BASE_URL, "lookup.php", single("i", id)),
            Self::FilterByIngredient { ingredient } => {
                Endpoint::get_with(BASE_URL, "filter.php", single("i", ingredient))
            }
        }
    }
}

impl From<DrinkEndpoint> for Endpoint {
    fn from(value: DrinkEndpoint) -> Self {
        value.endpoint()
    }
}

fn single(key: &str, value: &str) -> Parameters {
    let mut parameters = Parameters::new();
    parameters.insert(key.to_string(), json!(value));
    parameters
}
