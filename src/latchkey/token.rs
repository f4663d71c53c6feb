//! Confirmation token generation.
//!
//! A token is a random component followed by the current time in milliseconds,
//! both rendered in base 36. Collisions with an existing account's token are
//! retried in [`generate_unique`]. Tokens are not secrets.

use chrono::Utc;
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate() -> String {
    let random = Uuid::new_v4().as_u64_pair().0;
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}{}", to_base36(random), to_base36(millis))
}

/// Generates tokens until one is not rejected by `is_taken`.
pub fn generate_unique(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let token = generate();
        if !is_taken(&token) {
            return token;
        }
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
