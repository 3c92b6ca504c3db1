use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub photo_url: String,
    pub available: bool,
}

impl Professional {
    pub fn new(id: &str, name: &str, specialties: &[&str], rating: f32, photo_url: &str, available: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            rating,
            photo_url: photo_url.to_string(),
            available,
        }
    }
}
