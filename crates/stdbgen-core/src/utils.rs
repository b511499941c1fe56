/// Convert snake_case, kebab-case, space separated or camelCase to PascalCase.
///
/// Any non-alphanumeric character ends the current word and is dropped; the
/// next alphanumeric character is uppercased. Inside a word, an uppercase
/// letter that follows a lowercase letter starts a new word. Every other
/// letter is lowercased, so runs of capitals collapse (`HTTPServer` becomes
/// `Httpserver`).
///
/// # Examples
/// ```
/// use stdbgen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("chat_message"), "ChatMessage");
/// assert_eq!(to_pascal_case("sendMessage"), "SendMessage");
/// assert_eq!(to_pascal_case("ChatMessage"), "ChatMessage");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
            prev = Some(c);
            continue;
        }

        if !capitalize_next && c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase())
        {
            capitalize_next = true;
        }

        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
        prev = Some(c);
    }
    result
}
