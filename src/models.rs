//! Response models for the drink API.
//!
//! The API wraps every list response in a `{"drinks": [...]}` envelope and
//! uses `null` rather than an empty array for no results; [`DrinkPage`]
//! absorbs that quirk so callers always see a plain vector.

use serde::{Deserialize, Deserializer};

/// One drink record, trimmed to the fields the browsing screens render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Drink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic")]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass")]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// Absolute URL of the thumbnail image, fed to `request_image`.
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: Option<String>,
}

/// List envelope returned by every drink endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrinkPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub drinks: Vec<Drink>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Drink>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Drink>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_field_names() {
        let body = r#"{
            "drinks": [{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strCategory": "Ordinary Drink",
                "strAlcoholic": "Alcoholic",
                "strGlass": "Cocktail glass",
                "strInstructions": "Rub the rim of the glass with the lime slice.",
                "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg"
            }]
        }"#;

        let page: DrinkPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.drinks.len(), 1);
        let drink = &page.drinks[0];
        assert_eq!(drink.id, "11007");
        assert_eq!(drink.name, "Margarita");
        assert_eq!(drink.category.as_deref(), Some("Ordinary Drink"));
        assert!(drink.thumbnail.as_deref().unwrap().ends_with(".jpg"));
    }

    #[test]
    fn null_drinks_decodes_to_empty_page() {
        let page: DrinkPage = serde_json::from_str(r#"{"drinks": null}"#).unwrap();
        assert!(page.drinks.is_empty());
    }

    #[test]
    fn missing_envelope_field_decodes_to_empty_page() {
        let page: DrinkPage = serde_json::from_str("{}").unwrap();
        assert!(page.drinks.is_empty());
    }
}
