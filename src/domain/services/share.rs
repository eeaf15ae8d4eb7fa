use crate::domain::services::renderer::render;

/// Keeps only ASCII digits.
pub fn sanitize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Builds `<base><digits>?text=<encoded message>`, omitting the phone part when it has no digits.
pub fn share_link(base_url: &str, message: &str, phone: Option<&str>) -> String {
    let encoded = urlencoding::encode(message);
    let digits = phone.map(sanitize_phone).unwrap_or_default();
    format!("{}{}?text={}", base_url, digits, encoded)
}

/// Renders the template for `name` and wraps it in a share link.
pub fn share_link_for(base_url: &str, template: &str, name: &str, phone: Option<&str>) -> String {
    share_link(base_url, &render(template, name), phone)
}
