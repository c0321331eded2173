use pretty_assertions::assert_eq;
use slked::{markup_spans, render_markup};

#[test]
fn render_is_identity_without_directives() {
    for s in [
        "",
        "Versatile foot soldier. Can learn the Defend ability.",
        "no markers | here, just a pipe",
    ] {
        assert_eq!(render_markup(s), s);
    }
}

#[test]
fn render_substitutes_both_line_break_forms() {
    assert_eq!(
        render_markup("first|nsecond\nthird"),
        "first<br>second<br>third"
    );
}

#[test]
fn render_expands_a_color_span_in_argb_order() {
    // alpha ff, red 12, green 34, blue 56
    assert_eq!(
        render_markup("|cff123456body|r"),
        "<span style=\"color: rgba(18, 52, 86, 1)\">body</span>"
    );
}

#[test]
fn render_keeps_malformed_spans_literal() {
    // Invalid hex digits: only the newline substitution applies.
    assert_eq!(render_markup("|CZZ body |R\nnext"), "|CZZ body |R<br>next");
    // Too few digits.
    assert_eq!(render_markup("|cff00 body |r"), "|cff00 body |r");
    // Missing end marker.
    assert_eq!(render_markup("|cff123456 body"), "|cff123456 body");
}

#[test]
fn render_keeps_sequential_spans_independent() {
    let out = render_markup("|cffffcc00Attack:|r Normal |cffffcc00Range:|r 90");
    assert_eq!(
        out,
        "<span style=\"color: rgba(255, 204, 0, 1)\">Attack:</span> Normal \
         <span style=\"color: rgba(255, 204, 0, 1)\">Range:</span> 90"
    );
}

#[test]
fn render_supports_empty_transparent_spans() {
    assert_eq!(
        render_markup("|C00000000|R"),
        "<span style=\"color: rgba(0, 0, 0, 0)\"></span>"
    );
}

#[test]
fn render_matches_mixed_case_markers_and_digits() {
    assert_eq!(render_markup("|c00fF00Ff x |r"), render_markup("|C00FF00FF x |R"));
}

#[test]
fn rendered_bodies_preserve_their_content() {
    // Body survives unchanged inside the styled container, including
    // characters that look like partial markers.
    let out = render_markup("|cffffffff100% |x pipes|r");
    assert_eq!(
        out,
        "<span style=\"color: rgba(255, 255, 255, 1)\">100% |x pipes</span>"
    );
}

#[test]
fn span_scan_agrees_with_the_renderer_on_what_is_a_span() {
    let input = "a|nb |cffffcc00gold|r tail |cZZnot-a-span|r";
    let spans = markup_spans(input);

    let colored: Vec<_> = spans.iter().filter(|s| s.color.is_some()).collect();
    assert_eq!(colored.len(), 1);
    assert_eq!(colored[0].text, "gold");

    // Everything concatenated reproduces the input modulo token expansion.
    let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, "a\nb gold tail |cZZnot-a-span|r");
}
