use bionic_dom::{BaseDocument, ElementData, local_name};
use bionic_html::HtmlDocument;
use bionic_reader::{Reader, ReaderState, TreeWalker, WordRenderer, WordStyler};

const HI_CAT: &str = concat!(
    "<span class=\"turbo-vue\">",
    "<span style=\"font-weight: 600;\">hi</span> ",
    "<span style=\"font-weight: 400;\">c</span>",
    "<span style=\"font-weight: 600;\">a</span>",
    "<span style=\"font-weight: 400;\">t</span>",
    "</span>"
);

fn parse(html: &str) -> BaseDocument {
    HtmlDocument::from_html(html).into_inner()
}

fn body_html(doc: &BaseDocument) -> String {
    doc.inner_html(doc.body_id().unwrap())
}

#[test]
fn enable_renders_and_disable_restores() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();

    assert_eq!(reader.toggle(&mut doc), ReaderState::Enabled);
    assert_eq!(body_html(&doc), format!("<p>{HI_CAT}</p>"));
    assert_eq!(reader.records().len(), 1);
    assert!(reader.watcher().is_running());

    assert_eq!(reader.toggle(&mut doc), ReaderState::Disabled);
    assert_eq!(body_html(&doc), "<p>hi cat</p>");
    assert!(reader.records().is_empty());
    assert!(reader.observer().is_none());
}

#[test]
fn rendering_again_after_restore_is_identical() {
    let mut doc = parse("<div><p>The quick brown fox</p><ul><li>jumps (over)</li></ul></div>");
    let original = body_html(&doc);
    let mut reader = Reader::default();

    reader.enable(&mut doc);
    let first = body_html(&doc);
    assert_ne!(first, original);

    let summary = reader.disable(&mut doc);
    assert_eq!(summary.restored, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(body_html(&doc), original);

    reader.enable(&mut doc);
    assert_eq!(body_html(&doc), first);
}

#[test]
fn restored_containers_are_freed() {
    let mut doc = parse("<p>some words here</p>");
    let nodes_before = doc.tree().len();
    let mut reader = Reader::default();

    reader.enable(&mut doc);
    assert!(doc.tree().len() > nodes_before);
    reader.disable(&mut doc);
    assert_eq!(doc.tree().len(), nodes_before);
}

#[test]
fn enable_and_disable_are_idempotent() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();

    assert_eq!(reader.disable(&mut doc).restored, 0);
    assert_eq!(reader.enable(&mut doc), 1);
    assert_eq!(reader.enable(&mut doc), 0);
    assert_eq!(reader.records().len(), 1);
    assert_eq!(body_html(&doc), format!("<p>{HI_CAT}</p>"));
}

#[test]
fn skipped_tags_are_never_touched() {
    let mut doc = parse(
        "<p>read <code>let mut total</code></p><pre><code>fn main() {}</code></pre>\
         <h1>Big title</h1><nav><a href=\"/\">Home page</a></nav>",
    );
    let mut reader = Reader::default();
    reader.enable(&mut doc);

    let code = doc.find_element(&local_name!("code")).unwrap();
    assert_eq!(doc.inner_html(code), "let mut total");
    let h1 = doc.find_element(&local_name!("h1")).unwrap();
    assert_eq!(doc.inner_html(h1), "Big title");
    let nav = doc.find_element(&local_name!("nav")).unwrap();
    assert_eq!(doc.inner_html(nav), "<a href=\"/\">Home page</a>");

    // Only "read " was rendered
    assert_eq!(reader.records().len(), 1);
    let p = doc.find_element(&local_name!("p")).unwrap();
    assert!(doc.inner_html(p).starts_with("<span class=\"turbo-vue\">"));
}

#[test]
fn walk_continues_past_filtered_siblings() {
    let mut doc = parse("<p><code>skip me</code> after code</p><p>next one</p>");
    let mut reader = Reader::default();

    let body = doc.body_id().unwrap();
    let found = TreeWalker::new(reader.filter()).collect(&doc, body);
    assert_eq!(found.len(), 2);
    assert_eq!(doc.text_content(found[0]), " after code");
    assert_eq!(doc.text_content(found[1]), "next one");

    assert_eq!(reader.enable(&mut doc), 2);
}

#[test]
fn inserted_paragraph_is_rendered_in_one_delivery() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);
    let body = doc.body_id().unwrap();

    // Build the paragraph off-document, then insert it in one go
    let p = doc.create_element(ElementData::html(local_name!("p")));
    let text = doc.create_text_node("new words");
    doc.mutate().append_children(p, &[text]).unwrap();
    doc.mutate().append_children(body, &[p]).unwrap();

    assert!(reader.watcher().has_pending(&doc));
    assert_eq!(reader.process_pending(&mut doc), 1);
    assert!(doc.inner_html(p).starts_with("<span class=\"turbo-vue\">"));
    assert_eq!(reader.records().len(), 2);

    // The container inserted by the reader is not reported back
    assert!(!reader.watcher().has_pending(&doc));
    assert_eq!(reader.process_pending(&mut doc), 0);
    assert!(reader.watcher().is_running());
}

#[test]
fn inserted_text_inside_rendered_output_is_left_alone() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);

    let container = reader.records()[0].rendered;
    let text = doc.create_text_node("extra words");
    doc.mutate().append_children(container, &[text]).unwrap();

    assert_eq!(reader.process_pending(&mut doc), 0);
    assert_eq!(doc.text_content(container), "hi catextra words");
}

#[test]
fn a_node_reported_twice_is_rendered_once() {
    let mut doc = parse("<p>first</p><div>second</div>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);
    let body = doc.body_id().unwrap();
    let div = doc.find_element(&local_name!("div")).unwrap();

    let text = doc.create_text_node("more text");
    doc.mutate().append_children(div, &[text]).unwrap();
    // Moving the div reports it (and so the text inside it) again
    let p = doc.find_element(&local_name!("p")).unwrap();
    doc.mutate().insert_nodes_before(p, &[div]).unwrap();

    assert_eq!(reader.process_pending(&mut doc), 1);
    assert_eq!(reader.records().len(), 3);
    assert_eq!(doc.get_node(body).unwrap().children[0], div);
}

#[test]
fn nodes_removed_before_delivery_are_ignored() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);
    let body = doc.body_id().unwrap();

    let text = doc.create_text_node("short lived");
    doc.mutate().append_children(body, &[text]).unwrap();
    doc.mutate().remove_node(text).unwrap();

    assert_eq!(reader.process_pending(&mut doc), 0);
    assert_eq!(reader.records().len(), 1);
}

#[test]
fn batches_are_ignored_while_disabled() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);
    let body = doc.body_id().unwrap();
    let text = doc.create_text_node("late arrival");
    doc.mutate().append_children(body, &[text]).unwrap();

    reader.disable(&mut doc);
    assert_eq!(reader.process_pending(&mut doc), 0);
    assert_eq!(doc.text_content(text), "late arrival");
    assert_eq!(doc.parent_id(text), Some(body));
}

#[test]
fn restore_skips_moved_containers() {
    let mut doc = parse("<div><p>hi cat</p></div><p>elephant</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);
    assert_eq!(reader.records().len(), 2);

    // Page script moves the first container out of its paragraph
    let body = doc.body_id().unwrap();
    let moved = reader.records()[0].rendered;
    doc.mutate().append_children(body, &[moved]).unwrap();
    reader.process_pending(&mut doc);

    let summary = reader.disable(&mut doc);
    assert_eq!(summary.restored, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(doc.parent_id(moved), Some(body));
    assert!(reader.records().is_empty());
}

#[test]
fn document_without_body_renders_from_root() {
    let mut doc = BaseDocument::new();
    let p = doc.create_element(ElementData::html(local_name!("p")));
    let text = doc.create_text_node("hi cat");
    doc.mutate().append_children(p, &[text]).unwrap();
    doc.mutate().append_children(0, &[p]).unwrap();

    let mut reader = Reader::default();
    assert_eq!(reader.enable(&mut doc), 1);
    assert_eq!(doc.inner_html(p), HI_CAT);
}

#[test]
fn renderer_only_records_successful_swaps() {
    let mut doc = parse("<p>hi cat</p>");
    let renderer = WordRenderer::new(WordStyler::default(), "turbo-vue");
    let nodes_before = doc.tree().len();

    let detached = doc.create_text_node("nobody owns me");
    assert_eq!(renderer.render(&mut doc, detached), None);

    let blank = doc.create_text_node("  \n ");
    let p = doc.find_element(&local_name!("p")).unwrap();
    doc.mutate().append_children(p, &[blank]).unwrap();
    assert_eq!(renderer.render(&mut doc, blank), None);
    assert_eq!(renderer.render(&mut doc, p), None);

    // No container was left behind
    assert_eq!(doc.tree().len(), nodes_before + 2);
}

#[test]
fn page_text_is_escaped_not_parsed() {
    let mut doc = BaseDocument::new();
    let p = doc.create_element(ElementData::html(local_name!("p")));
    let text = doc.create_text_node("<img src=x> & more");
    doc.mutate().append_children(p, &[text]).unwrap();
    doc.mutate().append_children(0, &[p]).unwrap();

    let mut reader = Reader::default();
    reader.enable(&mut doc);

    assert!(doc.find_element(&local_name!("img")).is_none());
    assert_eq!(doc.text_content(p), "<img src=x> & more");
}

#[test]
fn skipped_tags_inserted_later_are_left_alone() {
    let mut doc = parse("<p>hi cat</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);
    let body = doc.body_id().unwrap();

    let markup = "<code>let x = 1;</code><nav><a href=\"/\">Home page</a></nav>\
                  <h1>Late title</h1><p>plain words</p>";
    let section = doc.create_element(ElementData::html(local_name!("section")));
    bionic_html::set_inner_html(&mut doc, section, markup).unwrap();
    doc.mutate().append_children(body, &[section]).unwrap();

    // Only the paragraph is rendered
    assert_eq!(reader.process_pending(&mut doc), 1);
    let code = doc.find_element(&local_name!("code")).unwrap();
    assert_eq!(doc.inner_html(code), "let x = 1;");
    let nav = doc.find_element(&local_name!("nav")).unwrap();
    assert_eq!(doc.inner_html(nav), "<a href=\"/\">Home page</a>");
    let h1 = doc.find_element(&local_name!("h1")).unwrap();
    assert_eq!(doc.inner_html(h1), "Late title");

    // Text added straight into a skipped element later on is left alone too
    let more = doc.create_text_node(" more code");
    doc.mutate().append_children(code, &[more]).unwrap();
    assert_eq!(reader.process_pending(&mut doc), 0);
    assert_eq!(doc.inner_html(code), "let x = 1; more code");
}

#[test]
fn non_breaking_spaces_survive_rendering() {
    let mut doc = parse("<p>10\u{a0}km away</p>");
    let mut reader = Reader::default();
    reader.enable(&mut doc);

    let p = doc.find_element(&local_name!("p")).unwrap();
    assert_eq!(doc.text_content(p), "10\u{a0}km away");
    reader.disable(&mut doc);
    assert_eq!(doc.text_content(p), "10\u{a0}km away");
}

#[test]
fn rendered_text_keeps_every_character() {
    let mut doc = BaseDocument::new();
    let p = doc.create_element(ElementData::html(local_name!("p")));
    let text = doc.create_text_node("ab\u{0}cd and\u{2028}more");
    doc.mutate().append_children(p, &[text]).unwrap();
    doc.mutate().append_children(0, &[p]).unwrap();

    let mut reader = Reader::default();
    assert_eq!(reader.enable(&mut doc), 1);
    assert_eq!(doc.text_content(p), "ab\u{0}cd and\u{2028}more");
}
