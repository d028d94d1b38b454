use mdline::to_html;

#[test]
fn all_heading_levels() {
    for level in 1..=6 {
        let input = format!("{} Heading", "#".repeat(level));
        assert_eq!(to_html(&input), format!("<h{level}>Heading</h{level}>\n"));
    }
}

#[test]
fn seven_hashes_is_paragraph() {
    assert_eq!(to_html("####### Too deep"), "<p>####### Too deep</p>\n");
}

#[test]
fn hash_without_space_is_paragraph() {
    assert_eq!(to_html("#hashtag"), "<p>#hashtag</p>\n");
}

#[test]
fn heading_text_is_not_substituted() {
    assert_eq!(
        to_html("## **bold** __em__ [[private]] ((x))"),
        "<h2>**bold** __em__ [[private]] ((x))</h2>\n"
    );
}

#[test]
fn heading_is_stripped_first() {
    assert_eq!(to_html("   ### Indented   "), "<h3>Indented</h3>\n");
}

#[test]
fn heading_keeps_inner_spacing() {
    assert_eq!(to_html("#  two spaces"), "<h1> two spaces</h1>\n");
}

#[test]
fn heading_closes_open_list() {
    assert_eq!(
        to_html("- item\n## After"),
        "<ul>\n<li>item</li>\n</ul>\n<h2>After</h2>\n"
    );
}

#[test]
fn lone_hash_is_paragraph() {
    assert_eq!(to_html("# "), "<p>#</p>\n");
}

#[test]
fn separator_controls_are_stripped() {
    assert_eq!(to_html("\x1c# H\x1c"), "<h1>H</h1>\n");
    assert_eq!(to_html("\x1f- item\x1e"), "<ul>\n<li>item</li>\n</ul>\n");
}
