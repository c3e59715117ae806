use bionic_dom::{BaseDocument, DomError, ElementData, local_name};

fn element(doc: &mut BaseDocument, local: bionic_dom::LocalName) -> usize {
    doc.create_element(ElementData::html(local))
}

/// `<body><p>hello <em>there</em></p></body>` attached to the document node
fn small_tree(doc: &mut BaseDocument) -> (usize, usize, usize, usize) {
    let body = element(doc, local_name!("body"));
    let p = element(doc, local_name!("p"));
    let text = doc.create_text_node("hello ");
    let em = element(doc, local_name!("em"));
    let inner = doc.create_text_node("there");

    let mut mutr = doc.mutate();
    mutr.append_children(0, &[body]).unwrap();
    mutr.append_children(body, &[p]).unwrap();
    mutr.append_children(p, &[text, em]).unwrap();
    mutr.append_children(em, &[inner]).unwrap();
    (body, p, text, em)
}

#[test]
fn contains_is_inclusive() {
    let mut doc = BaseDocument::new();
    let (body, p, text, em) = small_tree(&mut doc);

    assert!(doc.contains(body, text));
    assert!(doc.contains(p, p));
    assert!(!doc.contains(em, text));
    assert!(doc.is_connected(text));
    assert_eq!(doc.body_id(), Some(body));
}

#[test]
fn replace_child_swaps_in_place() {
    let mut doc = BaseDocument::new();
    let (_, p, text, em) = small_tree(&mut doc);
    let span = element(&mut doc, local_name!("span"));

    doc.mutate().replace_child(p, span, text).unwrap();

    assert_eq!(doc.get_node(p).unwrap().children, vec![span, em]);
    assert_eq!(doc.parent_id(text), None);
    assert_eq!(doc.parent_id(span), Some(p));
    assert_eq!(doc.inner_html(p), "<span></span><em>there</em>");

    // The detached text node survives and can be put back
    doc.mutate().replace_child(p, text, span).unwrap();
    assert_eq!(doc.inner_html(p), "hello <em>there</em>");
}

#[test]
fn replace_child_rejects_stale_parent() {
    let mut doc = BaseDocument::new();
    let (body, _, text, _) = small_tree(&mut doc);
    let span = element(&mut doc, local_name!("span"));

    let err = doc.mutate().replace_child(body, span, text).unwrap_err();
    assert_eq!(err, DomError::NotAChild { parent: body, child: text });
    assert_eq!(doc.parent_id(span), None);
}

#[test]
fn inserting_an_ancestor_is_rejected() {
    let mut doc = BaseDocument::new();
    let (body, _, _, em) = small_tree(&mut doc);

    let err = doc.mutate().append_children(em, &[body]).unwrap_err();
    assert_eq!(err, DomError::HierarchyRequest { parent: em, node: body });
}

#[test]
fn insert_before_and_move_within_parent() {
    let mut doc = BaseDocument::new();
    let (_, p, text, em) = small_tree(&mut doc);

    doc.mutate().insert_nodes_before(text, &[em]).unwrap();
    assert_eq!(doc.get_node(p).unwrap().children, vec![em, text]);

    doc.mutate().append_children(p, &[em]).unwrap();
    assert_eq!(doc.get_node(p).unwrap().children, vec![text, em]);
}

#[test]
fn drop_node_frees_subtree() {
    let mut doc = BaseDocument::new();
    let (_, p, _, em) = small_tree(&mut doc);
    let before = doc.tree().len();

    assert_eq!(doc.drop_node(em), 2);
    assert_eq!(doc.tree().len(), before - 2);
    assert!(doc.get_node(em).is_none());
    assert_eq!(doc.inner_html(p), "hello ");
}

#[test]
fn serialization_escapes_text_and_attributes() {
    let mut doc = BaseDocument::new();
    let div = element(&mut doc, local_name!("div"));
    let text = doc.create_text_node("a < b & c");
    let br = element(&mut doc, local_name!("br"));
    let mut mutr = doc.mutate();
    mutr.set_attribute(div, local_name!("title"), "say \"hi\"").unwrap();
    mutr.append_children(div, &[text, br]).unwrap();

    assert_eq!(
        doc.outer_html(div),
        "<div title=\"say &quot;hi&quot;\">a &lt; b &amp; c<br></div>"
    );
    assert_eq!(doc.text_content(div), "a < b & c");
}

#[test]
fn debug_tree_lists_nodes_by_depth() {
    let mut doc = BaseDocument::new();
    let (body, p, _, em) = small_tree(&mut doc);

    let dump = doc.debug_tree(p);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], format!("<p> ({p})"));
    assert_eq!(lines[1], "  TEXT \"hello\"");
    assert_eq!(lines[2], format!("  <em> ({em})"));
    assert!(doc.debug_tree(0).contains(&format!("<body> ({body})")));
    doc.print_tree();
}

#[test]
fn reexported_namespace_macros_build_html_names() {
    use bionic_dom::{Attribute, QualName, namespace_url, ns};

    let el = ElementData::html(local_name!("p"));
    assert_eq!(el.name, QualName::new(None, ns!(html), local_name!("p")));
    assert_eq!(Attribute::new(local_name!("class"), "lead").name.ns, ns!());
}
