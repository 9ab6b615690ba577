//! Markup stripping for rich-text product fields.

/// Elements whose boundaries separate words. Removing them must leave a space
/// behind so `<p>Blue</p><p>Red</p>` does not become `BlueRed`.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "br",
    "caption",
    "dd",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Elements removed together with everything they contain.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// A tag found at the start of a string.
struct Tag {
    /// Byte length including the angle brackets.
    len: usize,
    /// Lowercased element name, empty for comments and declarations.
    name: String,
    closing: bool,
}

/// Strip all markup from `input`.
///
/// `script` and `style` elements are removed with their contents, block-level
/// tags become a single space, inline tags vanish, and stray `<` / `>` are
/// dropped. Whitespace runs (including line breaks) collapse to one space and
/// the result is trimmed. Entities are left as they are.
///
/// The output never contains `<` or `>`, which makes the function idempotent.
///
/// # Example
///
/// ```
/// use product_indexer::processor::strip_all_tags;
///
/// assert_eq!(strip_all_tags("<p>Blue</p><p>Red</p>"), "Blue Red");
/// assert_eq!(strip_all_tags("<b>Ni</b>ce"), "Nice");
/// ```
pub fn strip_all_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(['<', '>']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('>') {
            rest = &tail[1..];
            continue;
        }

        let Some(tag) = parse_tag(tail) else {
            rest = &tail[1..];
            continue;
        };

        let after = &tail[tag.len..];

        if !tag.closing && RAW_TEXT_TAGS.contains(&tag.name.as_str()) {
            rest = skip_raw_text(after, &tag.name);
            out.push(' ');
            continue;
        }

        if BLOCK_TAGS.contains(&tag.name.as_str()) {
            out.push(' ');
        }
        rest = after;
    }
    out.push_str(rest);

    collapse_whitespace(&out)
}

/// Parse the tag that `tail` starts with, if any.
///
/// `tail` must start with `<`. Returns `None` when the `<` does not open a tag
/// (e.g. `a < b`) or the tag is never closed.
fn parse_tag(tail: &str) -> Option<Tag> {
    if tail.starts_with("<!--") {
        // An unterminated comment swallows the rest of the input.
        let len = tail.find("-->").map_or(tail.len(), |end| end + 3);
        return Some(Tag {
            len,
            name: String::new(),
            closing: false,
        });
    }

    let body = &tail[1..];
    let first = body.chars().next()?;
    if !(first.is_ascii_alphabetic() || matches!(first, '/' | '!' | '?')) {
        return None;
    }

    let end = tag_end(tail).or_else(|| tail.find('>'))?;
    let closing = first == '/';
    let name_start = if closing { &body[1..] } else { body };
    let name: String = name_start
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    Some(Tag {
        len: end + 1,
        name,
        closing,
    })
}

/// Byte offset of the `>` closing the tag at the start of `tail`, skipping
/// any `>` inside a quoted attribute value. `None` when the tag is never
/// closed outside quotes, e.g. on an unterminated quote.
fn tag_end(tail: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, byte) in tail.bytes().enumerate().skip(1) {
        match (quote, byte) {
            (Some(open), b) if b == open => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

/// Skip past the closing tag of a raw-text element named `name`.
fn skip_raw_text<'a>(after: &'a str, name: &str) -> &'a str {
    let lowered = after.to_ascii_lowercase();
    let Some(start) = lowered.find(&format!("</{}", name)) else {
        return "";
    };
    match after[start..].find('>') {
        Some(end) => &after[start + end + 1..],
        None => "",
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split(|c: char| c.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_paragraph() {
        assert_eq!(strip_all_tags("<p>Blue</p>"), "Blue");
        assert_eq!(strip_all_tags("<b>Nice</b>"), "Nice");
    }

    #[test]
    fn test_block_tags_separate_words() {
        assert_eq!(strip_all_tags("<p>Blue</p><p>Red</p>"), "Blue Red");
        assert_eq!(strip_all_tags("one<br>two<br/>three"), "one two three");
        assert_eq!(
            strip_all_tags("<ul><li>small</li><li>large</li></ul>"),
            "small large"
        );
    }

    #[test]
    fn test_inline_tags_do_not_split_words() {
        assert_eq!(strip_all_tags("<strong>Ni</strong>ce <em>mug</em>"), "Nice mug");
        assert_eq!(
            strip_all_tags(r#"<a href="/shop?a=1&b=2">Buy</a> now"#),
            "Buy now"
        );
    }

    #[test]
    fn test_angle_bracket_inside_quoted_attribute() {
        assert_eq!(strip_all_tags(r#"<a title="1 > 0">Buy</a> now"#), "Buy now");
        assert_eq!(
            strip_all_tags(r#"<img alt="a>b" src="x.png"><p>Blue</p>"#),
            "Blue"
        );
        assert_eq!(strip_all_tags("<span title='x > y'>Red</span>"), "Red");
    }

    #[test]
    fn test_unterminated_attribute_quote_ends_at_first_bracket() {
        assert_eq!(strip_all_tags(r#"<p title="oops>Blue</p>"#), "Blue");
        assert_eq!(strip_all_tags("<p title=don't>Blue</p>"), "Blue");
    }

    #[test]
    fn test_script_and_style_contents_removed() {
        let html = "<style>p { color: red; }</style><p>Text</p><SCRIPT>alert('<b>')</SCRIPT>after";
        assert_eq!(strip_all_tags(html), "Text after");
    }

    #[test]
    fn test_unterminated_script_drops_rest() {
        assert_eq!(strip_all_tags("before<script>var x = 1;"), "before");
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(strip_all_tags("a<!-- hidden > text -->b"), "ab");
        assert_eq!(strip_all_tags("a<!-- never closed"), "a");
    }

    #[test]
    fn test_stray_angle_brackets_dropped() {
        assert_eq!(strip_all_tags("1 < 2 and 3 > 2"), "1 2 and 3 2");
        assert_eq!(strip_all_tags("<b unterminated"), "b unterminated");
    }

    #[test]
    fn test_line_breaks_collapse() {
        assert_eq!(
            strip_all_tags("  first line\r\n\tsecond   line \n"),
            "first line second line"
        );
    }

    #[test]
    fn test_entities_are_preserved() {
        assert_eq!(strip_all_tags("<p>Tom &amp; Jerry&nbsp;!</p>"), "Tom &amp; Jerry&nbsp;!");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(
            strip_all_tags("<p>青い</p><p>マグカップ</p>"),
            "青い マグカップ"
        );
    }

    #[test]
    fn test_output_has_no_markup_characters() {
        let inputs = [
            "<div><p>Blue</p></div>",
            "x<<y>>z",
            "<<script>>",
            "> leading",
            "<p class=\"a>b\">text</p>",
            "<?xml version=\"1.0\"?><root/>",
            "<!DOCTYPE html><html><body>hi</body></html>",
        ];
        for input in inputs {
            let stripped = strip_all_tags(input);
            assert!(
                !stripped.contains('<') && !stripped.contains('>'),
                "markup left in {:?} -> {:?}",
                input,
                stripped
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<p>Blue</p>\n<p>Red</p>",
            "a < b > c",
            "<b>bold</b>&amp;<i>italic</i>",
            "  spaced   out  ",
            "<p>青い</p>",
            "",
        ];
        for input in inputs {
            let once = strip_all_tags(input);
            assert_eq!(strip_all_tags(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_all_tags(""), "");
        assert_eq!(strip_all_tags("<p></p>"), "");
    }
}
