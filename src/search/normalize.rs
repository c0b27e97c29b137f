//! Text canonicalization shared by listing titles and queries.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Canonicalizes text so a listing title and a query can be compared.
///
/// The pipeline runs in a single pass over the NFD decomposition:
/// - **Diacritics**: combining marks are dropped, so "Vídeo" → "video"
/// - **Case**: ASCII lower-casing after decomposition
/// - **Punctuation**: anything outside `[a-z0-9]` becomes a space
/// - **Whitespace**: runs collapse to one space, ends are trimmed
///
/// Output only ever contains `[a-z0-9 ]`, which makes the function idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfd() {
        if is_combining_mark(c) {
            continue;
        }

        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Splits an already normalized string into its space-separated tokens.
pub(crate) fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Placa de Vídeo", "placa de video")]
    #[case("  GeForce   RTX\t4070  ", "geforce rtx 4070")]
    #[case("Monitor 27\" Gamer 144Hz", "monitor 27 gamer 144hz")]
    #[case("SSD 1TB - Kingston (NVMe)", "ssd 1tb kingston nvme")]
    #[case("Memória DDR5", "memoria ddr5")]
    #[case("AÇÃO", "acao")]
    #[case("rtx-4070", "rtx 4070")]
    fn test_normalize_cases(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("!!!---???")]
    #[case("日本")]
    #[case("🦀")]
    fn test_normalize_degenerate_input_is_empty(#[case] input: &str) {
        check!(normalize(input).is_empty());
    }

    #[test]
    fn test_normalize_non_latin_separates_words() {
        check!(normalize("rtx日本4070") == "rtx 4070");
        check!(normalize("Москва ssd") == "ssd");
    }

    #[rstest]
    #[case("Placa de Vídeo NVIDIA GeForce RTX 4070 Ti 12GB")]
    #[case("  ---Ryzen 7 5700X3D---  ")]
    #[case("Ünïcödé ÇÃÕ")]
    fn test_normalize_idempotent(#[case] input: &str) {
        let once = normalize(input);
        check!(normalize(&once) == once);
    }

    #[test]
    fn test_tokens() {
        check!(tokens("rtx 4070 ti") == vec!["rtx", "4070", "ti"]);
        check!(tokens("").is_empty());
    }
}
