use std::sync::Arc;

use crate::error::Result;
use crate::models::city::City;
use crate::repository::CityRepository;

#[derive(Clone)]
pub struct CityService {
    cities: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(cities: Arc<dyn CityRepository>) -> Self {
        Self { cities }
    }

    pub async fn find_all(&self) -> Result<Vec<City>> {
        self.cities.find_all().await
    }
}
