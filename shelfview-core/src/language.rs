//! Language code resolution

/// Resolve a short language code to its display name.
///
/// The table is static; codes it does not know pass through unchanged as
/// their own display name.
pub fn language_name(code: &str) -> &str {
    match code {
        "SA" => "Sanskrit",
        "EN" => "English",
        "BN" => "Bengali",
        "ES" => "Spanish",
        "DE" => "German",
        "HI" => "Hindi",
        other => other,
    }
}
