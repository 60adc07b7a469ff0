use serde::{Deserialize, Serialize};

/// Clinic, lab or practitioner listed on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub address: Option<String>,
    pub status: String,
}

impl From<&Provider> for UpdateProviderDto {
    fn from(p: &Provider) -> Self {
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            specialty: p.specialty.clone(),
            address: p.address.clone(),
            status: p.status.clone(),
        }
    }
}
