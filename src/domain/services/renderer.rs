/// Literal token replaced by the invitee's name.
pub const PLACEHOLDER: &str = "{{nama}}";

/// Trims the name and collapses every internal whitespace run into a single `+`.
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("+")
}

/// Replaces every occurrence of [`PLACEHOLDER`] with the sanitized name.
pub fn render(template: &str, name: &str) -> String {
    template.replace(PLACEHOLDER, &sanitize_name(name))
}
