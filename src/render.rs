//! Recommendation text rendering.
//!
//! One-shot transform from lightly-marked-up text to a block AST.
//! Recognizes `**bold**`, `*italic*`, `#`/`##`/`###` headings, `-`/`•`/
//! `1.` list items, and blank-line-separated paragraphs. Anything else
//! (unterminated markers, deeper headings, nested markup) stays literal.
//! Deliberately not a markdown parser.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// An inline run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "style", content = "text")]
pub enum Span {
    Plain(String),
    Strong(String),
    Emphasis(String),
}

/// A block-level element of the rendered recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    ListItem(Vec<Span>),
}

fn ordered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+").unwrap())
}

/// Render raw recommendation text into displayable blocks.
///
/// Inline emphasis is resolved first, then block constructs (headings
/// before lists); leftover lines group into paragraphs. Tagged regions
/// are never reprocessed.
pub fn render(raw: &str) -> Vec<Block> {
    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<String>) {
        if !paragraph.is_empty() {
            let text = paragraph.join(" ");
            blocks.push(Block::Paragraph(parse_spans(&text)));
            paragraph.clear();
        }
    }

    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph);
            continue;
        }

        if let Some((level, rest)) = heading_prefix(line) {
            flush(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading {
                level,
                spans: parse_spans(rest),
            });
            continue;
        }

        if let Some(rest) = list_prefix(line) {
            flush(&mut blocks, &mut paragraph);
            blocks.push(Block::ListItem(parse_spans(rest)));
            continue;
        }

        paragraph.push(line.to_string());
    }
    flush(&mut blocks, &mut paragraph);

    blocks
}

/// Recognize a `#`/`##`/`###` heading. Four or more hashes, or a hash
/// run without a following space, is not a heading.
fn heading_prefix(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest.trim_start()))
}

/// Recognize a `- `, `• `, or `1. ` list marker.
fn list_prefix(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("• ")) {
        return Some(rest.trim_start());
    }
    ordered_item_re()
        .find(line)
        .map(|m| line[m.end()..].trim_start())
}

/// Split a line into plain/strong/emphasis spans. Single pass; an
/// unmatched or empty marker pair is emitted as literal text.
fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    let flush_plain = |spans: &mut Vec<Span>, plain: &mut String| {
        if !plain.is_empty() {
            spans.push(Span::Plain(std::mem::take(plain)));
        }
    };

    while let Some(star) = rest.find('*') {
        plain.push_str(&rest[..star]);
        let after = &rest[star..];

        if let Some(inner) = after.strip_prefix("**") {
            match inner.find("**") {
                Some(end) if end > 0 => {
                    flush_plain(&mut spans, &mut plain);
                    spans.push(Span::Strong(inner[..end].to_string()));
                    rest = &inner[end + 2..];
                }
                _ => {
                    plain.push_str("**");
                    rest = inner;
                }
            }
            continue;
        }

        let inner = &after[1..];
        match inner.find('*') {
            Some(end) if end > 0 => {
                flush_plain(&mut spans, &mut plain);
                spans.push(Span::Emphasis(inner[..end].to_string()));
                rest = &inner[end + 1..];
            }
            _ => {
                plain.push('*');
                rest = inner;
            }
        }
    }
    plain.push_str(rest);
    flush_plain(&mut spans, &mut plain);

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Span {
        Span::Plain(s.to_string())
    }

    #[test]
    fn bold_and_italic_spans() {
        let blocks = render("**Bold** and *italic*");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                Span::Strong("Bold".into()),
                plain(" and "),
                Span::Emphasis("italic".into()),
            ])]
        );
    }

    #[test]
    fn heading_levels() {
        let blocks = render("# Un\n## Deux\n### Trois");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    spans: vec![plain("Un")]
                },
                Block::Heading {
                    level: 2,
                    spans: vec![plain("Deux")]
                },
                Block::Heading {
                    level: 3,
                    spans: vec![plain("Trois")]
                },
            ]
        );
    }

    #[test]
    fn four_hashes_is_not_a_heading() {
        let blocks = render("#### pas un titre");
        assert_eq!(blocks, vec![Block::Paragraph(vec![plain("#### pas un titre")])]);
    }

    #[test]
    fn hash_without_space_is_literal() {
        let blocks = render("#hashtag");
        assert_eq!(blocks, vec![Block::Paragraph(vec![plain("#hashtag")])]);
    }

    #[test]
    fn list_markers() {
        let blocks = render("- tiret\n• puce\n1. numéro");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem(vec![plain("tiret")]),
                Block::ListItem(vec![plain("puce")]),
                Block::ListItem(vec![plain("numéro")]),
            ]
        );
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let blocks = render("ligne un\nligne deux\n\nsecond paragraphe");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![plain("ligne un ligne deux")]),
                Block::Paragraph(vec![plain("second paragraphe")]),
            ]
        );
    }

    #[test]
    fn emphasis_inside_heading_and_list() {
        let blocks = render("## La **Série D**\n- un métier *concret*");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    spans: vec![plain("La "), Span::Strong("Série D".into())],
                },
                Block::ListItem(vec![plain("un métier "), Span::Emphasis("concret".into())]),
            ]
        );
    }

    #[test]
    fn unterminated_markers_stay_literal() {
        assert_eq!(
            render("**jamais fermé"),
            vec![Block::Paragraph(vec![plain("**jamais fermé")])]
        );
        assert_eq!(
            render("un * seul"),
            vec![Block::Paragraph(vec![plain("un * seul")])]
        );
    }

    #[test]
    fn empty_marker_pairs_stay_literal() {
        assert_eq!(render("****"), vec![Block::Paragraph(vec![plain("****")])]);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render("").is_empty());
        assert!(render("\n\n\n").is_empty());
    }

    #[test]
    fn render_is_idempotent_on_plain_output() {
        // Rendering tags nothing twice: a plain paragraph re-rendered
        // yields the same structure.
        let once = render("du texte sans balises");
        let text = match &once[0] {
            Block::Paragraph(spans) => match &spans[0] {
                Span::Plain(t) => t.clone(),
                _ => panic!("expected plain span"),
            },
            _ => panic!("expected paragraph"),
        };
        assert_eq!(render(&text), once);
    }

    #[test]
    fn fallback_template_renders_structured() {
        let blocks = render(crate::client::FALLBACK_RECOMMENDATION);
        assert!(blocks.iter().any(|b| matches!(b, Block::ListItem(_))));
        assert!(blocks.iter().any(|b| {
            matches!(b, Block::Paragraph(spans)
                if spans.iter().any(|s| matches!(s, Span::Strong(_))))
        }));
    }
}
