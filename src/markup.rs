//! Tooltip markup preview rendering.
//!
//! Stored tooltip text carries two inline conventions: the `|n` line-break
//! token and color spans of the form `|cAARRGGBB ... |r` (8 hex digits:
//! alpha, red, green, blue). [`render_markup`] expands both into display
//! markup for an HTML-capable preview surface; [`markup_spans`] exposes the
//! same scan as structured segments for widget toolkits that paint colored
//! text directly. Both are pure and total: malformed directives are left as
//! literal text rather than rejected.

use crate::statics;

/// A decoded span color. Channel values are raw bytes; alpha maps to a
/// 0.0-1.0 opacity fraction when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl SpanColor {
    /// Decodes exactly 8 hex digits in alpha, red, green, blue order.
    pub fn parse(hex: &str) -> Option<SpanColor> {
        if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(SpanColor {
            alpha: u8::from_str_radix(&hex[0..2], 16).ok()?,
            red: u8::from_str_radix(&hex[2..4], 16).ok()?,
            green: u8::from_str_radix(&hex[4..6], 16).ok()?,
            blue: u8::from_str_radix(&hex[6..8], 16).ok()?,
        })
    }

    /// CSS color function form, e.g. `rgba(255, 204, 0, 0.502)`.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            format_alpha(self.alpha)
        )
    }
}

/// Alpha byte as a decimal fraction of 255 with trailing zeros trimmed.
fn format_alpha(alpha: u8) -> String {
    match alpha {
        0 => "0".to_string(),
        0xFF => "1".to_string(),
        _ => {
            let mut s = format!("{:.4}", f64::from(alpha) / 255.0);
            while s.ends_with('0') {
                s.pop();
            }
            if s.ends_with('.') {
                s.pop();
            }
            s
        }
    }
}

/// One rendered segment: plain or colored text. Line breaks appear as `\n`
/// inside `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub color: Option<SpanColor>,
}

struct ColorSpan {
    start: usize,
    body_start: usize,
    body_end: usize,
    end: usize,
    color: SpanColor,
}

fn find_marker(bytes: &[u8], from: usize, letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'|' && (bytes[i + 1] == letter || bytes[i + 1] == upper) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Locates the leftmost well-formed color span at or after `from`.
///
/// A candidate start marker only matches if exactly 8 hex digits follow and
/// an end marker is reached before any further start marker; otherwise the
/// candidate stays literal and the scan moves on. All markers and digits
/// match case-insensitively.
fn find_color_span(text: &str, from: usize) -> Option<ColorSpan> {
    let bytes = text.as_bytes();
    let mut search_from = from;
    'candidates: loop {
        let start = find_marker(bytes, search_from, b'c')?;
        let body_start = start + 2 + 8;
        if body_start > bytes.len() || !bytes[start + 2..body_start].iter().all(u8::is_ascii_hexdigit)
        {
            search_from = start + 2;
            continue;
        }

        let mut pos = body_start;
        while pos + 1 < bytes.len() {
            if bytes[pos] == b'|' {
                match bytes[pos + 1] {
                    b'r' | b'R' => {
                        let color = SpanColor::parse(&text[start + 2..body_start])
                            .expect("digits validated above");
                        return Some(ColorSpan {
                            start,
                            body_start,
                            body_end: pos,
                            end: pos + 2,
                            color,
                        });
                    }
                    // Spans do not nest; an unterminated candidate yields to
                    // the next start marker.
                    b'c' | b'C' => {
                        search_from = pos;
                        continue 'candidates;
                    }
                    _ => {}
                }
            }
            pos += 1;
        }
        return None;
    }
}

/// Expands annotated tooltip text into display markup.
///
/// Every `|n` token and raw newline becomes `<br>`; every well-formed color
/// span becomes a `<span style="color: rgba(...)">` wrapping its body.
/// Scanning resumes immediately after each substitution, so an inserted
/// container is never re-scanned. Unrecognized or malformed directives pass
/// through unchanged; the function never fails.
pub fn render_markup(input: &str) -> String {
    let text = input
        .replace(statics::MARKUP_LINE_BREAK, statics::HTML_LINE_BREAK)
        .replace('\n', statics::HTML_LINE_BREAK);

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(span) = find_color_span(&text, pos) {
        out.push_str(&text[pos..span.start]);
        out.push_str("<span style=\"color: ");
        out.push_str(&span.color.css());
        out.push_str("\">");
        out.push_str(&text[span.body_start..span.body_end]);
        out.push_str("</span>");
        pos = span.end;
    }
    out.push_str(&text[pos..]);
    out
}

/// The same scan as [`render_markup`], but returning structured segments:
/// `|n` tokens become `\n` characters and color span bodies carry their
/// decoded color. Used by the live preview to paint colored text without
/// going through an HTML surface.
pub fn markup_spans(input: &str) -> Vec<MarkupSpan> {
    let text = input.replace(statics::MARKUP_LINE_BREAK, "\n");

    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(span) = find_color_span(&text, pos) {
        if span.start > pos {
            spans.push(MarkupSpan {
                text: text[pos..span.start].to_string(),
                color: None,
            });
        }
        spans.push(MarkupSpan {
            text: text[span.body_start..span.body_end].to_string(),
            color: Some(span.color),
        });
        pos = span.end;
    }
    if pos < text.len() {
        spans.push(MarkupSpan {
            text: text[pos..].to_string(),
            color: None,
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::{MarkupSpan, SpanColor, format_alpha, markup_spans, render_markup};

    #[test]
    fn directive_free_input_is_identity() {
        assert_eq!(render_markup("Versatile foot soldier."), "Versatile foot soldier.");
        assert_eq!(render_markup(""), "");
    }

    #[test]
    fn line_breaks_are_substituted_and_nothing_else_changes() {
        assert_eq!(render_markup("a|nb\nc"), "a<br>b<br>c");
        assert_eq!(render_markup("|n|n"), "<br><br>");
    }

    #[test]
    fn single_span_renders_rgba_in_argb_order() {
        // alpha ff, red ff, green cc, blue 00
        assert_eq!(
            render_markup("|cffffcc00Attack:|r"),
            "<span style=\"color: rgba(255, 204, 0, 1)\">Attack:</span>"
        );
    }

    #[test]
    fn alpha_is_a_fraction_of_255() {
        // 0x80 / 255 = 0.50196..., trimmed to 3 decimals by the formatter.
        assert_eq!(
            render_markup("|c80ff0000x|r"),
            "<span style=\"color: rgba(255, 0, 0, 0.502)\">x</span>"
        );
    }

    #[test]
    fn malformed_hex_stays_literal() {
        assert_eq!(render_markup("|cZZ body |r"), "|cZZ body |r");
        assert_eq!(render_markup("|cff00 body |r"), "|cff00 body |r");
    }

    #[test]
    fn unterminated_span_stays_literal() {
        assert_eq!(render_markup("|cffffcc00 no end"), "|cffffcc00 no end");
    }

    #[test]
    fn sequential_spans_stay_independent() {
        let out = render_markup("|cff0000ffa|r|cff00ff00b|r");
        assert_eq!(
            out,
            "<span style=\"color: rgba(0, 0, 255, 1)\">a</span>\
             <span style=\"color: rgba(0, 255, 0, 1)\">b</span>"
        );
    }

    #[test]
    fn unterminated_candidate_yields_to_the_next_start_marker() {
        let out = render_markup("|cffff0000 a |cff00ff00 b |r");
        assert_eq!(
            out,
            "|cffff0000 a <span style=\"color: rgba(0, 255, 0, 1)\"> b </span>"
        );
    }

    #[test]
    fn empty_body_with_zero_alpha_renders_transparent_container() {
        assert_eq!(
            render_markup("|c00000000|r"),
            "<span style=\"color: rgba(0, 0, 0, 0)\"></span>"
        );
    }

    #[test]
    fn markers_and_digits_match_case_insensitively() {
        assert_eq!(
            render_markup("|C00FF00FF mixed |R"),
            render_markup("|c00ff00ff mixed |r")
        );
    }

    #[test]
    fn line_break_tokens_inside_a_span_body_are_expanded() {
        assert_eq!(
            render_markup("|cffffcc00a|nb|r"),
            "<span style=\"color: rgba(255, 204, 0, 1)\">a<br>b</span>"
        );
    }

    #[test]
    fn span_scan_matches_the_html_renderer() {
        let spans = markup_spans("plain |cffffcc00Gold:|r rest|nnext");
        assert_eq!(
            spans,
            vec![
                MarkupSpan {
                    text: "plain ".to_string(),
                    color: None,
                },
                MarkupSpan {
                    text: "Gold:".to_string(),
                    color: Some(SpanColor {
                        alpha: 0xFF,
                        red: 0xFF,
                        green: 0xCC,
                        blue: 0x00,
                    }),
                },
                MarkupSpan {
                    text: " rest\nnext".to_string(),
                    color: None,
                },
            ]
        );
    }

    #[test]
    fn alpha_formatting_trims_trailing_zeros() {
        assert_eq!(format_alpha(0), "0");
        assert_eq!(format_alpha(0xFF), "1");
        // 0x33 = 51, and 51 / 255 = 0.2 exactly.
        assert_eq!(format_alpha(0x33), "0.2");
    }

    #[test]
    fn span_color_parse_rejects_bad_input() {
        assert!(SpanColor::parse("ffffcc0").is_none());
        assert!(SpanColor::parse("ffffcc000").is_none());
        assert!(SpanColor::parse("ffffcczz").is_none());
        assert_eq!(
            SpanColor::parse("80FFcc00"),
            Some(SpanColor {
                alpha: 0x80,
                red: 0xFF,
                green: 0xCC,
                blue: 0x00,
            })
        );
    }
}
