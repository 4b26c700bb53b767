use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{Center, CenterId, Pet};

/// Backend operations the results view depends on.
#[allow(async_fn_in_trait)]
pub trait PetApi {
    async fn fetch_pets(&self) -> Result<Vec<Pet>, ApiError>;

    /// `Ok(None)` when the center does not exist.
    async fn fetch_center(&self, id: CenterId) -> Result<Option<Center>, ApiError>;
}

#[derive(Clone, PartialEq, Debug)]
pub struct HttpPetApi {
    base_url: String,
}

impl HttpPetApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn pets_url(&self) -> String {
        format!("{}/pets", self.base_url)
    }

    pub fn center_url(&self, id: CenterId) -> String {
        format!("{}/centers/{}", self.base_url, id)
    }

    async fn get(url: &str) -> Result<Response, ApiError> {
        log::debug!("GET {}", url);
        Ok(Request::get(url).send().await?)
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

impl PetApi for HttpPetApi {
    async fn fetch_pets(&self) -> Result<Vec<Pet>, ApiError> {
        let url = self.pets_url();
        let response = Self::get(&url).await?;
        Self::decode(&url, response).await
    }

    async fn fetch_center(&self, id: CenterId) -> Result<Option<Center>, ApiError> {
        let url = self.center_url(id);
        let response = Self::get(&url).await?;
        if response.status() == 404 {
            log::debug!("center {} not found", id);
            return Ok(None);
        }
        Self::decode(&url, response).await.map(Some)
    }
}
