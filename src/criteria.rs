use crate::model::{Center, Pet};

pub const SEARCH_KEY: &str = "search";
pub const ANIMAL_KEY: &str = "animal";

/// What the user searched for. Empty strings mean "no filter".
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SearchCriteria {
    pub search: String,
    pub animal: String,
}

impl SearchCriteria {
    pub fn new(search: impl Into<String>, animal: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            animal: animal.into(),
        }
    }

    /// Builds criteria from already decoded query pairs. Unknown keys are ignored,
    /// later duplicates win.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                SEARCH_KEY => criteria.search = value.into(),
                ANIMAL_KEY => criteria.animal = value.into(),
                _ => {}
            }
        }
        criteria
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if !self.search.is_empty() {
            pairs.push((SEARCH_KEY, self.search.as_str()));
        }
        if !self.animal.is_empty() {
            pairs.push((ANIMAL_KEY, self.animal.as_str()));
        }
        pairs
    }

    /// State or city name compare case-insensitively, the postal code exactly.
    pub fn matches_location(&self, center: &Center) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let search = self.search.to_lowercase();
        center.city.state.name.to_lowercase() == search
            || center.city.name.to_lowercase() == search
            || center.postal_code == self.search
    }

    pub fn matches_species(&self, pet: &Pet) -> bool {
        self.animal.is_empty() || pet.species == self.animal
    }

    pub fn matches(&self, pet: &Pet, center: &Center) -> bool {
        self.matches_location(center) && self.matches_species(pet)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{City, State};

    pub(crate) fn center(id: i64, city: &str, state: &str, postal_code: &str) -> Center {
        Center {
            center_id: id,
            postal_code: postal_code.to_string(),
            city: City {
                name: city.to_string(),
                state: State {
                    name: state.to_string(),
                },
            },
            name: None,
            address: None,
        }
    }

    pub(crate) fn pet(id: i64, species: &str, center_id: i64) -> Pet {
        Pet {
            pet_id: id,
            species: species.to_string(),
            center_id,
            name: Some(format!("pet-{}", id)),
            breed: None,
            age: None,
            gender: None,
            size: None,
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn location_matches_state_and_city_ignoring_case() {
        let madrid = center(1, "Alcalá", "Madrid", "28801");

        assert!(SearchCriteria::new("madrid", "").matches_location(&madrid));
        assert!(SearchCriteria::new("ALCALÁ", "").matches_location(&madrid));
        assert!(!SearchCriteria::new("Sevilla", "").matches_location(&madrid));
    }

    #[test]
    fn location_requires_exact_postal_code() {
        let center = center(1, "Girona", "Catalunya", "17001");

        assert!(SearchCriteria::new("17001", "").matches_location(&center));
        assert!(!SearchCriteria::new("1700", "").matches_location(&center));
        assert!(!SearchCriteria::new(" 17001", "").matches_location(&center));
    }

    #[test]
    fn empty_search_matches_any_location() {
        let center = center(1, "Bilbao", "Euskadi", "48001");
        assert!(SearchCriteria::default().matches_location(&center));
    }

    #[test]
    fn species_is_exact_match() {
        let criteria = SearchCriteria::new("", "dog");

        assert!(criteria.matches_species(&pet(1, "dog", 1)));
        assert!(!criteria.matches_species(&pet(2, "Dog", 1)));
        assert!(!criteria.matches_species(&pet(3, "cat", 1)));
        assert!(SearchCriteria::default().matches_species(&pet(4, "cat", 1)));
    }

    #[test]
    fn query_pairs_fill_known_keys_only() {
        let criteria = SearchCriteria::from_query_pairs([
            ("search", "Valencia"),
            ("page", "2"),
            ("animal", "cat"),
        ]);
        assert_eq!(criteria, SearchCriteria::new("Valencia", "cat"));

        let missing = SearchCriteria::from_query_pairs(Vec::<(String, String)>::new());
        assert_eq!(missing, SearchCriteria::default());
    }

    #[test]
    fn query_pairs_skip_empty_criteria() {
        assert_eq!(
            SearchCriteria::new("Lugo", "").to_query_pairs(),
            vec![("search", "Lugo")]
        );
        assert!(SearchCriteria::default().to_query_pairs().is_empty());
    }
}
