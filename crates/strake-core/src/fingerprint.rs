use xxhash_rust::xxh64::xxh64;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    if value == 0 {
        return "0".repeat(11);
    }
    let mut result = Vec::with_capacity(11);
    while value > 0 {
        let idx = (value % 62) as usize;
        result.push(BASE62_CHARS[idx]);
        value /= 62;
    }
    // Pad to 11 chars
    while result.len() < 11 {
        result.push(b'0');
    }
    result.reverse();
    String::from_utf8(result).expect("base62 chars are valid UTF-8")
}

/// Compute the fingerprint of a member declaration's canonical form.
///
/// fingerprint = base62(xxhash64(canonical))
///
/// Carried in violation payloads so two reports of the same declaration are
/// byte-identical and diffable, without shipping the whole declaration in
/// log lines.
pub fn fingerprint(canonical: &str) -> String {
    base62_encode(xxh64(canonical.as_bytes(), 0))
}
