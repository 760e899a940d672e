//! Fixed-width lowercase hex codec for keys and signatures.

pub(crate) fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode exactly `N` bytes from hex. Surrounding whitespace and an
/// optional `0x` prefix are accepted.
pub(crate) fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], String> {
    let s = input.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != N * 2 {
        return Err(format!("expected {} hex chars, got {}", N * 2, s.len()));
    }
    let mut out = [0u8; N];
    for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk).map_err(|_| "non-ascii input".to_string())?;
        out[i] = u8::from_str_radix(pair, 16)
            .map_err(|_| format!("invalid hex digit pair {pair:?} at offset {}", i * 2))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(decode_fixed::<2>("abCD").unwrap(), [0xab, 0xcd]);
        assert_eq!(decode_fixed::<2>(" 0x0102 ").unwrap(), [1, 2]);
    }

    #[test]
    fn rejects_wrong_length_and_bad_digits() {
        assert!(decode_fixed::<2>("abc").is_err());
        assert!(decode_fixed::<2>("zz00").is_err());
        assert!(decode_fixed::<1>("é").is_err());
    }

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(encode(&[0xAB, 0x01]), "ab01");
    }
}
