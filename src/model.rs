use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

pub type PetId = i64;
pub type CenterId = i64;

/// An adoptable animal as returned by the pets endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub pet_id: PetId,
    pub species: String,
    pub center_id: CenterId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Adoption center address record.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub center_id: CenterId,
    #[serde(deserialize_with = "postal_code")]
    pub postal_code: String,
    pub city: City,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct City {
    pub name: String,
    pub state: State,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct State {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
    Other(IgnoredAny),
}

/// The backend stores postal codes as integers; they are compared as text.
fn postal_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::Text(s) => Ok(s),
        NumberOrString::Other(_) => Err(serde::de::Error::custom("postal code must be a number or a string")),
    }
}

// Display only: anything unreadable becomes `None`.
fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => u32::try_from(n).ok(),
        NumberOrString::Text(s) => s.trim().parse().ok(),
        NumberOrString::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_decodes_camel_case_with_missing_display_fields() {
        let pet: Pet = serde_json::from_str(
            r#"{"petId": 7, "species": "dog", "centerId": 3, "name": "Rex", "imageUrl": "/img/rex.jpg"}"#,
        )
        .unwrap();

        assert_eq!(pet.pet_id, 7);
        assert_eq!(pet.center_id, 3);
        assert_eq!(pet.name.as_deref(), Some("Rex"));
        assert_eq!(pet.image_url.as_deref(), Some("/img/rex.jpg"));
        assert_eq!(pet.breed, None);
    }

    #[test]
    fn center_decodes_nested_city_and_state() {
        let center: Center = serde_json::from_str(
            r#"{"centerId": 3, "postalCode": "28001", "city": {"name": "Madrid", "state": {"name": "Comunidad de Madrid"}}}"#,
        )
        .unwrap();

        assert_eq!(center.postal_code, "28001");
        assert_eq!(center.city.name, "Madrid");
        assert_eq!(center.city.state.name, "Comunidad de Madrid");
    }

    #[test]
    fn numeric_postal_code_becomes_text() {
        let center: Center = serde_json::from_str(
            r#"{"centerId": 3, "postalCode": 28001, "city": {"name": "Madrid", "state": {"name": "Comunidad de Madrid"}}}"#,
        )
        .unwrap();
        assert_eq!(center.postal_code, "28001");
    }

    #[test]
    fn postal_code_of_wrong_type_is_rejected() {
        let result = serde_json::from_str::<Center>(
            r#"{"centerId": 3, "postalCode": [1], "city": {"name": "Madrid", "state": {"name": "Madrid"}}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unreadable_age_does_not_reject_pet() {
        let pets: Vec<Pet> = serde_json::from_str(
            r#"[
                {"petId": 1, "species": "dog", "centerId": 3, "age": "4"},
                {"petId": 2, "species": "cat", "centerId": 3, "age": "two years"},
                {"petId": 3, "species": "cat", "centerId": 3, "age": -1},
                {"petId": 4, "species": "cat", "centerId": 3, "age": null}
            ]"#,
        )
        .unwrap();

        let ages: Vec<Option<u32>> = pets.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![Some(4), None, None, None]);
    }
}
