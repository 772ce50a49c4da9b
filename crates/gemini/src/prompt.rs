/// Model used for item extraction.
pub const EXTRACTION_MODEL: &str = "gemini-2.5-flash-lite";

/// Wrap a user's shopping prompt in the extraction instruction.
///
/// The instruction asks for a bare JSON array so the response can be fed
/// straight to `pantry_core::extraction::parse_extraction`.
pub fn build_extraction_prompt(prompt: &str) -> String {
    format!(
        "Extract all food and grocery items, quantity, AND expiration dates from the user request. \
         Return ONLY a JSON array of objects in this format: \
         [{{\"item\": \"item name\", \"qty\": \"quantity or empty string\", \
         \"expires\": \"YYYY-MM-DD or empty string\"}}]. \
         User Request: \"{prompt}\""
    )
}
