use super::*;
use crate::{Color, GenerateParams, Palette, generate};

fn figure(text: &str, palette: Palette) -> Kronkel {
    let params = GenerateParams {
        desired_width: 3,
        ..GenerateParams::default()
    };
    generate(text, &params, palette).unwrap()
}

#[test]
fn document_carries_size_path_and_colors() {
    let k = figure("Ab,", Palette::default());
    let svg = SvgDocument::from_kronkel(&k).to_svg_string();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="96" height="96" viewBox="0 0 96 96""#));
    assert!(svg.contains(r##"fill="#ffffff""##));
    assert!(svg.contains(r##"stroke="#000000" stroke-width="6""##));
    assert!(svg.contains(&format!(r#"d="{}""#, k.path().to_svg_d())));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn colors_are_escaped_but_not_rewritten() {
    let k = figure(
        "a",
        Palette {
            background: Color::new("url(#a)\"<x>"),
            line: Color::new("Tomato"),
        },
    );
    let svg = SvgDocument::from_kronkel(&k).to_svg_string();
    assert!(svg.contains(r##"fill="url(#a)&quot;&lt;x&gt;""##));
    assert!(svg.contains(r#"stroke="Tomato""#));
}

#[test]
fn document_parses_with_usvg() {
    let k = figure("kronkelschrift", Palette::default());
    let svg = SvgDocument::from_kronkel(&k).to_svg_string();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
    assert_eq!(f64::from(tree.size().width()), k.canvas_size().width);
    assert_eq!(f64::from(tree.size().height()), k.canvas_size().height);
}
