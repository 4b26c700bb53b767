use futures::future::try_join_all;

use crate::api::PetApi;
use crate::criteria::SearchCriteria;
use crate::error::ApiError;
use crate::model::{Center, Pet};

/// Fetches every pet plus its center and keeps the ones matching `criteria`.
///
/// Center lookups run concurrently, one per pet. The first failing request fails
/// the whole search; a missing center only drops its pet.
pub async fn search_pets<A: PetApi>(api: &A, criteria: &SearchCriteria) -> Result<Vec<Pet>, ApiError> {
    let pets = api.fetch_pets().await?;
    log::info!("fetched {} pets, resolving centers", pets.len());

    let centers = try_join_all(pets.iter().map(|pet| api.fetch_center(pet.center_id))).await?;

    let matching = filter_pets(pets, centers, criteria);
    log::info!("{} pets match {:?}", matching.len(), criteria);
    Ok(matching)
}

/// Pairs each pet with the center looked up for it, in order.
pub fn filter_pets(pets: Vec<Pet>, centers: Vec<Option<Center>>, criteria: &SearchCriteria) -> Vec<Pet> {
    pets.into_iter()
        .zip(centers)
        .filter_map(|(pet, center)| match center {
            Some(center) if criteria.matches(&pet, &center) => Some(pet),
            _ => None,
        })
        .collect()
}
