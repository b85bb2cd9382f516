use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VolunteerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub comment: String,
}
