//! Document emission: serialized PDF bytes to a self-contained data URL.
//! The caller turns this into a downloadable blob; no business logic here.

use base64::Engine;

pub const DATA_URL_PREFIX: &str = "data:application/pdf;base64,";

pub fn to_data_url(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(DATA_URL_PREFIX.len() + bytes.len() * 4 / 3 + 4);
    out.push_str(DATA_URL_PREFIX);
    out.push_str(&base64::engine::general_purpose::STANDARD.encode(bytes));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_data_url_round_trips() {
        let url = to_data_url(b"%PDF-1.3 fake");
        assert!(url.starts_with(DATA_URL_PREFIX));
        let payload = url.strip_prefix(DATA_URL_PREFIX).unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(bytes, b"%PDF-1.3 fake");
    }
}
