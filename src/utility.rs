use anyhow::{ensure, Context, Result};
use encoding_rs::Encoding;

/// First `n` characters of `s`, for diagnostics.
pub fn preview(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

// 原稿のバイト列を文字列に直す．Shift_JIS の原稿もある
pub fn decode_text(bytes: &[u8], encoding_label: &str) -> Result<String> {
    let encoding = Encoding::for_label(encoding_label.as_bytes())
        .with_context(|| format!("Unknown encoding: {}", encoding_label))?;

    // BOM は走査側で捨てる
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    ensure!(
        !had_errors,
        "Malformed {} sequence in input",
        encoding.name()
    );

    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview() {
        assert_eq!(preview("あいうえおかきくけこさしす", 10), "あいうえおかきくけこ");
        assert_eq!(preview("ab", 10), "ab");
    }

    #[test]
    fn test_decode_shift_jis() -> Result<()> {
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("　段落");
        assert_eq!(decode_text(&bytes, "shift_jis")?, "　段落");
        assert_eq!(decode_text("　段落".as_bytes(), "utf-8")?, "　段落");
        Ok(())
    }

    #[test]
    fn test_decode_keeps_bom() -> Result<()> {
        assert_eq!(decode_text("\u{feff}本".as_bytes(), "utf-8")?, "\u{feff}本");
        Ok(())
    }

    #[test]
    fn test_decode_errors() {
        assert!(decode_text(b"abc", "no-such-encoding").is_err());
        assert!(decode_text(&[0xff, 0xfe, 0xfd], "utf-8").is_err());
    }
}
