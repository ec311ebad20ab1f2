/// Decode HTML entities found in translation text
///
/// Translations come back with entities such as `&quot;` and `&#39;`.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Label a chapter as `"{n}. {name}"`, falling back to `"{n}. Chapter {n}"`
pub fn chapter_label(number: u32, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("{number}. {name}"),
        _ => format!("{number}. Chapter {number}"),
    }
}

/// Render a fixed-width text progress bar such as `[#####-----]`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("(Allah) &quot;Be!&quot; &amp; it is"),
            "(Allah) \"Be!\" & it is"
        );
        assert_eq!(decode_entities("it&#39;s"), "it's");
    }

    #[test]
    fn test_decode_entities_plain_text_unchanged() {
        assert_eq!(decode_entities("In the Name of Allah"), "In the Name of Allah");
    }

    #[test]
    fn test_chapter_label_with_name() {
        assert_eq!(chapter_label(36, Some("Ya-Sin")), "36. Ya-Sin");
    }

    #[test]
    fn test_chapter_label_without_name() {
        assert_eq!(chapter_label(40, None), "40. Chapter 40");
        assert_eq!(chapter_label(40, Some("  ")), "40. Chapter 40");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(0.5, 10), "[#####-----]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(2.0, 4), "[####]");
    }
}
