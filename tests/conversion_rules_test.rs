//! End-to-end conversion of post bodies through `markdown_for`.

use wp_export_md::{PathConfig, SaveImages, markdown_for};

fn config(save_images: SaveImages) -> PathConfig {
    PathConfig::builder()
        .output("output")
        .save_images(save_images)
        .build()
        .unwrap()
}

fn convert(html: &str) -> String {
    markdown_for(html, &config(SaveImages::None)).unwrap()
}

#[test]
fn test_tweet_embed_kept_verbatim() {
    let tweet = r#"<blockquote class="twitter-tweet"><p lang="en">Hello</p></blockquote>"#;
    let markdown = convert(&format!("<p>Before</p>{tweet}<p>After</p>"));

    assert!(markdown.contains(tweet), "tweet markup changed: {markdown:?}");
    assert!(markdown.contains("Before"));
    assert!(markdown.contains("After"));
}

#[test]
fn test_codepen_embed_kept_verbatim() {
    let pen = r#"<p class="codepen" data-height="265" data-slug-hash="abcXYZ" data-user="me"><span>See the Pen</span></p>"#;
    let markdown = convert(pen);
    assert!(markdown.contains(pen), "codepen markup changed: {markdown:?}");
}

#[test]
fn test_paragraph_with_other_class_is_converted() {
    let markdown = convert(r#"<p class="codepen-ish" data-slug-hash="abc">Plain</p>"#);
    assert_eq!(markdown.trim(), "Plain");
}

#[test]
fn test_script_async_attribute_normalized() {
    let markdown = convert(
        r#"<p>Intro</p><script async="" src="https://platform.twitter.com/widgets.js" charset="utf-8"></script>"#,
    );
    assert!(
        markdown.contains(
            r#"<script async src="https://platform.twitter.com/widgets.js" charset="utf-8"></script>"#
        ),
        "unexpected script output: {markdown:?}"
    );
    assert!(!markdown.contains(r#"async="""#));
}

#[test]
fn test_script_after_embed_stays_attached() {
    let markdown = convert(
        r#"<blockquote class="twitter-tweet"><p>Hi</p></blockquote><script async src="https://x/w.js"></script>"#,
    );
    let quote_end = markdown.find("</blockquote>").unwrap();
    let script_start = markdown.find("<script async src=").unwrap();
    let between = &markdown[quote_end + "</blockquote>".len()..script_start];
    assert!(
        between.chars().all(|c| c == '\n'),
        "script drifted away from its embed: {markdown:?}"
    );
    assert!(between.len() <= 2, "got {markdown:?}");
}

#[test]
fn test_iframe_boolean_attributes_normalized() {
    let markdown = convert(
        r#"<iframe src="https://www.youtube.com/embed/xyz" allowfullscreen="" allowpaymentrequest=""></iframe>"#,
    );
    assert!(
        markdown.contains(
            r#"<iframe src="https://www.youtube.com/embed/xyz" allowfullscreen allowpaymentrequest></iframe>"#
        ),
        "unexpected iframe output: {markdown:?}"
    );
}

#[test]
fn test_bare_pre_with_language_becomes_fenced_block() {
    let markdown = convert(r#"<pre data-wetm-language="js">console.log(1)</pre>"#);
    assert!(
        markdown.contains("```js\nconsole.log(1)\n```"),
        "unexpected code block: {markdown:?}"
    );
}

#[test]
fn test_block_comment_language_reaches_fence() {
    let html = "<!-- wp:code {\"language\":\"rust\"} -->\n<pre class=\"wp-block-code\">fn main() {}</pre>\n<!-- /wp:code -->";
    let markdown = convert(html);
    assert!(
        markdown.contains("```rust\nfn main() {}\n```"),
        "language hint lost: {markdown:?}"
    );
}

#[test]
fn test_bare_pre_without_language_has_empty_fence_tag() {
    let markdown = convert("<pre>plain text</pre>");
    assert!(markdown.contains("```\nplain text\n```"), "got {markdown:?}");
}

#[test]
fn test_figure_becomes_embed_with_caption() {
    let markdown = convert(
        r#"<figure><img src="https://x/y/photo.png" alt=""><figcaption> Caption </figcaption></figure>"#,
    );
    assert!(
        markdown.contains("![[photo.png|caption]]\n*Caption*"),
        "unexpected figure output: {markdown:?}"
    );
}

#[test]
fn test_figure_without_caption() {
    let markdown = convert(r#"<figure><img src="https://x/y/photo.png"></figure>"#);
    assert_eq!(markdown.trim(), "![[photo.png|caption]]");
}

#[test]
fn test_figure_without_image_passes_content_through() {
    let markdown = convert("<figure><blockquote><p>Quoted</p></blockquote></figure>");
    assert!(markdown.contains("Quoted"));
    assert!(!markdown.contains("![["));
}

#[test]
fn test_footnote_reference_uses_link_text() {
    let markdown = convert(
        r##"<p>Claim<sup data-fn="f1" class="fn"><a href="#f1" id="f1-link">1</a></sup> stands.</p>"##,
    );
    assert!(markdown.contains("Claim[^1] stands."), "got {markdown:?}");
}

#[test]
fn test_emphasis_dropped() {
    assert_eq!(convert("<p>An <em>important</em> word</p>").trim(), "An important word");
}

#[test]
fn test_strong_still_converted() {
    assert_eq!(
        convert("<p>An <strong>important</strong> word</p>").trim(),
        "An **important** word"
    );
}

#[test]
fn test_div_inside_link_unwrapped() {
    let markdown = convert(r#"<a href="https://example.com/"><div>Label</div></a>"#);
    assert!(
        markdown.contains("[Label](https://example.com/)"),
        "link broken by div: {markdown:?}"
    );
}

#[test]
fn test_step_label_removed() {
    let markdown = convert(
        r#"<div class="swell-block-step__number"><span class="__label">STEP</span></div><p>Do the thing</p>"#,
    );
    assert!(!markdown.contains("STEP"), "step label survived: {markdown:?}");
    assert!(markdown.contains("Do the thing"));
}

#[test]
fn test_step_number_without_label_kept() {
    let markdown = convert(r#"<div class="swell-block-step__number"><span>Two</span></div>"#);
    assert!(markdown.contains("Two"));
}

#[test]
fn test_bracketed_heading_unwrapped() {
    let markdown = convert("<p>[html]&lt;h2&gt;Section&lt;/h2&gt;[/html]</p>");
    assert!(markdown.contains("## Section"), "got {markdown:?}");
    assert!(!markdown.contains("[html]"));
}

#[test]
fn test_image_paths_rewritten_when_saving_images() {
    let html = r#"<p><img src="https://cdn.example.com/uploads/2023/cat.jpg?w=300" alt="cat"></p>"#;

    let saved = markdown_for(html, &config(SaveImages::All)).unwrap();
    assert!(saved.contains("images/cat.jpg?w=300"), "got {saved:?}");

    let scraped = markdown_for(html, &config(SaveImages::Scraped)).unwrap();
    assert!(scraped.contains("images/cat.jpg?w=300"), "got {scraped:?}");

    let untouched = markdown_for(html, &config(SaveImages::Attached)).unwrap();
    assert!(untouched.contains("https://cdn.example.com/uploads/2023/cat.jpg"));
}

#[test]
fn test_list_marker_spacing_collapsed() {
    let markdown = convert("<ul><li>one</li><li>two</li></ul>");
    assert!(markdown.contains("- one\n- two"), "got {markdown:?}");
}

#[test]
fn test_separate_paragraphs_have_single_blank_line() {
    let markdown = convert("<p>One</p>\n\n<p>Two</p>\n\n\n\n<p>Three</p>");
    assert!(!markdown.contains("\n\n\n"), "got {markdown:?}");
    assert!(markdown.contains("One"));
    assert!(markdown.contains("Three"));
}

#[test]
fn test_table_handled_by_engine() {
    let markdown = convert(
        "<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>",
    );
    assert!(markdown.contains('|'), "got {markdown:?}");
    assert!(markdown.contains('A'));
    assert!(markdown.contains('2'));
}

#[test]
fn test_more_separator_comes_back_as_comment() {
    let markdown = convert("<p>Intro</p>\n\n<!--more-->\n\n<p>Body</p>");
    assert!(markdown.contains("<!--more-->"), "got {markdown:?}");
    assert!(!markdown.contains("\\<!--more"), "separator left escaped: {markdown:?}");
    assert!(markdown.find("Intro") < markdown.find("<!--more-->"));
    assert!(markdown.find("<!--more-->") < markdown.find("Body"));
}

#[test]
fn test_more_separator_with_label_comes_back_as_comment() {
    let markdown = convert("<p>Intro</p>\n\n<!--more Read on-->\n\n<p>Body</p>");
    assert!(markdown.contains("<!--more Read on-->"), "got {markdown:?}");
    assert!(!markdown.contains('\\'), "got {markdown:?}");
}

#[test]
fn test_step_label_inside_link_removed() {
    let markdown = convert(
        r#"<a href="https://e.com/"><div class="swell-block-step__number"><span class="__label">STEP</span></div>Go</a>"#,
    );
    assert!(!markdown.contains("STEP"), "step label survived: {markdown:?}");
    assert!(markdown.contains("[Go](https://e.com/)"), "got {markdown:?}");
}

#[test]
fn test_codepen_inside_link_kept_verbatim() {
    let pen = r#"<div class="codepen" data-slug-hash="abcXYZ">Pen</div>"#;
    let markdown = convert(&format!(r#"<a href="https://codepen.io/">{pen}</a>"#));
    assert!(markdown.contains(pen), "codepen unwrapped: {markdown:?}");
}

#[test]
fn test_footnote_without_link_uses_trimmed_own_text() {
    let markdown = convert(r#"<p>See<sup data-fn="f2"> 2 </sup> here.</p>"#);
    assert!(markdown.contains("See[^2] here."), "got {markdown:?}");
}
