use color_eyre::{eyre::WrapErr, Result};
use tracing::info;
use unocard::card::{Card, CardColor};

fn describe(card: &Card) -> String {
    let value = card
        .value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{card}\tcolor={}\tvalue={value}", card.color)
}

/// Splits the arguments into `COLOR [VALUE]` groups, so `RED 7` may be given
/// as one argument or two.
fn group_cards(args: &[String]) -> Vec<String> {
    let mut groups: Vec<Vec<&str>> = Vec::new();

    for token in args.iter().flat_map(|arg| arg.split_whitespace()) {
        let starts_card = CardColor::parse(token).is_ok()
            || groups.last().map_or(true, |group| group.len() > 1);

        if starts_card {
            groups.push(vec![token]);
        } else if let Some(group) = groups.last_mut() {
            group.push(token);
        }
    }

    groups.into_iter().map(|group| group.join(" ")).collect()
}

/// Parses every card, stopping at the first one that is not a card.
pub fn lines(args: &[String]) -> Result<Vec<String>> {
    let cards = group_cards(args);
    let mut lines = Vec::with_capacity(cards.len());

    for text in cards {
        let card = text
            .parse::<Card>()
            .wrap_err_with(|| format!("Could not read `{text}` as a card"))?;
        info!(%card, "read card");
        lines.push(describe(&card));
    }

    Ok(lines)
}
