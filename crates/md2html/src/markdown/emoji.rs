//! Emoji shortcode scanning and image markup
//!
//! Shortcodes follow the GitHub (gemoji) index: `:smile:`, `:+1:`,
//! `:white_check_mark:`. A shortcode that does not name a known emoji is
//! not a shortcode at all and stays part of the surrounding text.

use chumsky::prelude::*;

/// Base URL of the Twemoji SVG set
pub const TWEMOJI_SVG_CDN: &str = "https://cdn.jsdelivr.net/gh/jdecked/twemoji@15.1.0/assets/svg/";

const ZERO_WIDTH_JOINER: char = '\u{200d}';
const VARIATION_SELECTOR_16: char = '\u{fe0f}';

/// A piece of scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'src> {
    /// Literal text, kept as is
    Text(&'src str),
    /// Name of a known emoji, without the colons
    Shortcode(&'src str),
}

/// Shortcode name characters: `[A-Za-z0-9_+-]+`
fn shortcode_name<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || matches!(*c, '_' | '+' | '-'))
        .repeated()
        .at_least(1)
        .to_slice()
}

/// `:name:` where `name` is in the emoji index
fn known_shortcode<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    shortcode_name()
        .delimited_by(just(':'), just(':'))
        .filter(|name: &&str| emojis::get_by_shortcode(name).is_some())
}

/// Split text into literal runs and known shortcodes
pub fn segments<'src>() -> impl Parser<'src, &'src str, Vec<Segment<'src>>> {
    let shortcode = known_shortcode();
    let text = any()
        .and_is(shortcode.clone().not())
        .repeated()
        .at_least(1)
        .to_slice()
        .map(Segment::Text);

    choice((shortcode.map(Segment::Shortcode), text))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
}

/// Scan `text`, falling back to a single literal run if scanning fails
pub fn split_shortcodes(text: &str) -> Vec<Segment<'_>> {
    segments()
        .parse(text)
        .into_result()
        .unwrap_or_else(|_| vec![Segment::Text(text)])
}

/// Twemoji file stem for an emoji: lowercase hex code points joined by `-`
///
/// U+FE0F is dropped unless the sequence contains a zero-width joiner.
pub fn twemoji_code(emoji: &str) -> String {
    let keep_selector = emoji.contains(ZERO_WIDTH_JOINER);
    emoji
        .chars()
        .filter(|&c| keep_selector || c != VARIATION_SELECTOR_16)
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

/// `<img>` markup for a shortcode, or `None` if it is not in the index
pub fn image_tag(shortcode: &str) -> Option<String> {
    let emoji = emojis::get_by_shortcode(shortcode)?;
    Some(format!(
        r#"<img alt="{alt}" class="emoji" src="{cdn}{code}.svg" title=":{shortcode}:" />"#,
        alt = emoji.as_str(),
        cdn = TWEMOJI_SVG_CDN,
        code = twemoji_code(emoji.as_str()),
        shortcode = shortcode,
    ))
}
