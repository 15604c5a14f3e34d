use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref MIME_TYPES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("png", "image/png");
        m.insert("jpg", "image/jpeg");
        m.insert("jpeg", "image/jpeg");
        m.insert("gif", "image/gif");
        m.insert("webp", "image/webp");
        m.insert("bmp", "image/bmp");
        m.insert("svg", "image/svg+xml");
        m
    };
}

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode file bytes into a `data:` URL usable as an image source, the same
/// displayable form a browser file reader produces.
pub fn data_url(filename: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(filename), STANDARD.encode(bytes))
}

fn mime_for(filename: &str) -> &'static str {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .and_then(|ext| MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or(FALLBACK_MIME)
}
