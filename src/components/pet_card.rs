use crate::model::Pet;
use yew::prelude::*;

const PLACEHOLDER_IMAGE: &str = "/assets/pet-placeholder.svg";

#[derive(Properties, PartialEq)]
pub struct PetCardProps {
    pub pet: Pet,
}

#[function_component(PetCard)]
pub fn pet_card(props: &PetCardProps) -> Html {
    let pet = &props.pet;
    let name = pet.name.clone().unwrap_or_else(|| "Unnamed".to_string());

    html! {
        <article class="pet-card" id={format!("pet-{}", pet.pet_id)}>
            <img
                class="pet-photo"
                alt={format!("Photo of {}", name)}
                src={pet.image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())}
            />
            <div class="pet-info">
                <h2>{&name}</h2>
                <ul class="pet-details">
                    <li>{"Species: "}<strong>{&pet.species}</strong></li>
                    {detail("Breed", pet.breed.clone())}
                    {detail("Age", pet.age.map(format_age))}
                    {detail("Gender", pet.gender.clone())}
                    {detail("Size", pet.size.clone())}
                </ul>
                {
                    if let Some(description) = &pet.description {
                        html! { <p class="pet-description">{description}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </article>
    }
}

fn detail(label: &str, value: Option<String>) -> Html {
    match value {
        Some(value) => html! { <li>{format!("{}: ", label)}<strong>{value}</strong></li> },
        None => html! {},
    }
}

fn format_age(years: u32) -> String {
    match years {
        0 => "less than a year".to_string(),
        1 => "1 year".to_string(),
        n => format!("{} years", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_read_naturally() {
        assert_eq!(format_age(0), "less than a year");
        assert_eq!(format_age(1), "1 year");
        assert_eq!(format_age(6), "6 years");
    }
}
