use strum::IntoEnumIterator;
use unocard::card::CardColor;

/// One line per color tag, wild tags marked.
pub fn lines() -> Vec<String> {
    CardColor::iter()
        .map(|color| {
            if color.is_wild() {
                format!("{color} (wild)")
            } else {
                color.to_string()
            }
        })
        .collect()
}
