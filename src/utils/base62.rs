//! Base-62 short code codec.
//!
//! Short codes are derived deterministically from the row identifier
//! assigned by the store. The alphabet order (digits, then lowercase,
//! then uppercase) is fixed: changing it would break every code already
//! issued.

/// The 62-symbol alphabet, indexed by remainder.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Codes that are never looked up as short links.
///
/// Browsers probe `/favicon.ico` on every visit; the route answers
/// 204 No Content instead of treating it as a lookup.
pub const RESERVED_CODES: &[&str] = &["favicon.ico"];

/// Encodes an identifier as a base-62 string with no padding.
///
/// `encode(0)` returns `"0"`; for all other inputs the output length is
/// the minimal number of symbols needed. Distinct identifiers always
/// produce distinct codes.
///
/// # Examples
///
/// ```
/// use snip::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(1), "1");
/// assert_eq!(encode(63), "11");
/// ```
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return "0".to_string();
    }

    let base = ALPHABET.len() as u64;
    let mut symbols = Vec::new();

    while id > 0 {
        symbols.push(ALPHABET[(id % base) as usize]);
        id /= base;
    }

    symbols.iter().rev().map(|&b| b as char).collect()
}

/// Decodes a base-62 string back to its identifier.
///
/// Returns `None` for the empty string, for characters outside the
/// alphabet, or on overflow. The resolution path never calls this;
/// it exists to verify that [`encode`] is a bijection.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }

    let base = ALPHABET.len() as u64;
    let mut id: u64 = 0;

    for byte in code.bytes() {
        let value = ALPHABET.iter().position(|&a| a == byte)? as u64;
        id = id.checked_mul(base)?.checked_add(value)?;
    }

    Some(id)
}

/// Returns true if the code is reserved for system use.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
