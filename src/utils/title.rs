/// Derive a suggested product title from an uploaded file's name: drop the
/// trailing extension, collapse runs of underscores/hyphens into single
/// spaces, and capitalize the first character only.
pub fn suggest_title(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        // only strip when something follows the dot
        Some(i) if i + 1 < filename.len() => &filename[..i],
        _ => filename,
    };

    let mut spaced = String::with_capacity(stem.len());
    let mut in_separator = false;
    for ch in stem.chars() {
        if ch == '_' || ch == '-' {
            if !in_separator {
                spaced.push(' ');
                in_separator = true;
            }
        } else {
            spaced.push(ch);
            in_separator = false;
        }
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
