use crate::constants::API_KEY_VISIBLE_CHARS;

const REQUEST_ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a short identifier used to correlate the log lines of one request.
///
/// The identifier is 12 characters of uppercase letters and digits, produced
/// by the `nanoid` crate.
///
/// # Examples
/// ```
/// use tdu_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
pub fn request_id() -> String {
    nanoid::nanoid!(12, &REQUEST_ID_ALPHABET)
}

/// Masks an API key for logging, keeping only its last few characters.
///
/// # Examples
/// ```
/// use tdu_client::utils::id::mask_api_key;
/// assert_eq!(mask_api_key("secret-key-1234"), "***1234");
/// assert_eq!(mask_api_key("abc"), "***");
/// ```
#[must_use]
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= API_KEY_VISIBLE_CHARS {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - API_KEY_VISIBLE_CHARS..].iter().collect();
    format!("***{tail}")
}
