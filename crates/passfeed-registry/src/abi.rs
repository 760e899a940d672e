//! # Contract ABI Codec
//!
//! Just enough of the Solidity ABI to call `getUuids()` and decode its
//! `string[]` return value.
//!
//! ## Layout of a returned `string[]`
//!
//! ```text
//! word 0            offset of the array (normally 0x20)
//! at offset:        n = element count
//!                   n words: element offsets, relative to the word after n
//! at each element:  byte length L, then L bytes right-padded to 32
//! ```
//!
//! Every offset and length is bounds-checked against the buffer before use.

/// `bytes4(keccak256("getUuids()"))`.
pub const GET_UUIDS_SELECTOR: [u8; 4] = [0xb0, 0xc1, 0xee, 0xb2];

const WORD: usize = 32;

/// Malformed ABI data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    #[error("invalid hex: {0}")]
    Hex(String),
    #[error("read of {len} bytes at {at} exceeds {size}-byte buffer")]
    OutOfBounds { at: usize, len: usize, size: usize },
    #[error("word at {0} does not fit in usize")]
    Overflow(usize),
    #[error("element {0} is not valid UTF-8")]
    Utf8(usize),
}

/// Call data for a zero-argument function: the 0x-prefixed selector.
pub fn encode_call(selector: [u8; 4]) -> String {
    let mut s = String::with_capacity(10);
    s.push_str("0x");
    for b in selector {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

/// Decode a 0x-prefixed hex `eth_call` result as a `string[]`.
pub fn decode_string_array(hex: &str) -> Result<Vec<String>, AbiError> {
    let data = decode_hex(hex)?;
    let array_at = read_usize(&data, 0)?;
    let count = read_usize(&data, array_at)?;
    let base = checked_add(array_at, WORD)?;

    // Each element needs at least its offset word; reject absurd counts
    // before allocating.
    let head_len = count.checked_mul(WORD).ok_or(AbiError::Overflow(array_at))?;
    ensure(&data, base, head_len)?;

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let rel = read_usize(&data, base + i * WORD)?;
        let at = checked_add(base, rel)?;
        let len = read_usize(&data, at)?;
        let start = checked_add(at, WORD)?;
        ensure(&data, start, len)?;
        let s = std::str::from_utf8(&data[start..start + len]).map_err(|_| AbiError::Utf8(i))?;
        out.push(s.to_string());
    }
    Ok(out)
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, AbiError> {
    let s = hex.strip_prefix("0x").unwrap_or(hex);
    if s.len() % 2 != 0 {
        return Err(AbiError::Hex("odd length".into()));
    }
    s.as_bytes()
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|p| u8::from_str_radix(p, 16).ok())
                .ok_or_else(|| AbiError::Hex(format!("bad digit pair at offset {}", i * 2)))
        })
        .collect()
}

fn ensure(data: &[u8], at: usize, len: usize) -> Result<(), AbiError> {
    match at.checked_add(len) {
        Some(end) if end <= data.len() => Ok(()),
        _ => Err(AbiError::OutOfBounds {
            at,
            len,
            size: data.len(),
        }),
    }
}

fn checked_add(a: usize, b: usize) -> Result<usize, AbiError> {
    a.checked_add(b).ok_or(AbiError::Overflow(a))
}

/// Read a big-endian uint256 word at `at` that must fit in a `usize`.
fn read_usize(data: &[u8], at: usize) -> Result<usize, AbiError> {
    ensure(data, at, WORD)?;
    let word = &data[at..at + WORD];
    let (high, low) = word.split_at(WORD - 8);
    if high.iter().any(|&b| b != 0) {
        return Err(AbiError::Overflow(at));
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(buf)).map_err(|_| AbiError::Overflow(at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(n: usize) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[24..].copy_from_slice(&(n as u64).to_be_bytes());
        w
    }

    /// Standard ABI encoding of a `string[]` return value.
    fn encode_string_array(items: &[&str]) -> String {
        let mut tails: Vec<u8> = Vec::new();
        let mut offsets = Vec::new();
        for item in items {
            offsets.push(items.len() * WORD + tails.len());
            tails.extend_from_slice(&word(item.len()));
            tails.extend_from_slice(item.as_bytes());
            let pad = (WORD - item.len() % WORD) % WORD;
            tails.extend(std::iter::repeat(0u8).take(pad));
        }
        let mut out = Vec::new();
        out.extend_from_slice(&word(0x20));
        out.extend_from_slice(&word(items.len()));
        for off in offsets {
            out.extend_from_slice(&word(off));
        }
        out.extend_from_slice(&tails);
        let hex: String = out.iter().map(|b| format!("{b:02x}")).collect();
        format!("0x{hex}")
    }

    #[test]
    fn selector_encodes_as_call_data() {
        assert_eq!(encode_call(GET_UUIDS_SELECTOR), "0xb0c1eeb2");
    }

    #[test]
    fn decodes_single_short_string() {
        let hex = concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "6100000000000000000000000000000000000000000000000000000000000000",
        );
        assert_eq!(decode_string_array(hex).unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn decodes_empty_array() {
        assert!(decode_string_array(&encode_string_array(&[])).unwrap().is_empty());
    }

    #[test]
    fn decodes_uuid_strings_spanning_two_words() {
        let ids = [
            "0b6ef3a1-8c8d-4a2b-9d7e-2d5b1f6c9e01",
            "6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f",
            "",
        ];
        let decoded = decode_string_array(&encode_string_array(&ids)).unwrap();
        assert_eq!(decoded, ids);
    }

    #[test]
    fn truncated_payload_is_out_of_bounds() {
        let full = encode_string_array(&["0b6ef3a1-8c8d-4a2b-9d7e-2d5b1f6c9e01"]);
        let cut = &full[..full.len() - 64];
        assert!(matches!(
            decode_string_array(cut),
            Err(AbiError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn huge_count_is_rejected_without_allocating() {
        let hex = format!(
            "0x{}{}",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "00000000000000000000000000000000000000000000000000ffffffffffffff",
        );
        assert!(decode_string_array(&hex).is_err());
    }

    #[test]
    fn empty_result_is_rejected() {
        assert!(matches!(
            decode_string_array("0x"),
            Err(AbiError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(matches!(decode_string_array("0xzz"), Err(AbiError::Hex(_))));
        assert!(matches!(decode_string_array("0x123"), Err(AbiError::Hex(_))));
    }

    #[test]
    fn invalid_utf8_element_is_reported() {
        let hex = concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "ff00000000000000000000000000000000000000000000000000000000000000",
        );
        assert_eq!(decode_string_array(hex), Err(AbiError::Utf8(0)));
    }
}
