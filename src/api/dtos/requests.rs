use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateInviteeRequest {
    #[serde(default)]
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateInviteeRequest {
    #[serde(default)]
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct ListInviteesParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Deserialize)]
pub struct SaveTemplateRequest {
    pub template: String,
}
