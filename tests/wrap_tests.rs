use retag::{wrap, Element, ErrorKind, Fragment};

#[test]
fn test_wrap_nothing() -> Result<(), retag::Error> {
    assert!(wrap(Vec::new())?.is_empty());
    Ok(())
}

#[test]
fn test_wrap_single_element() -> Result<(), retag::Error> {
    let trees = wrap(vec![Element::new("person").into()])?;
    assert_eq!(trees.len(), 1);

    let root = trees.first().and_then(|tree| tree.elements.first());
    assert!(matches!(root, Some(Fragment::Element(el)) if el.name == "person"));
    Ok(())
}

#[test]
fn test_wrap_many_preserves_order() -> Result<(), retag::Error> {
    let trees = wrap(vec![
        Element::new("first").into(),
        Element::new("second").into(),
        Element::new("third").into(),
    ])?;

    let names: Vec<_> = trees
        .iter()
        .filter_map(|tree| match tree.elements.first() {
            Some(Fragment::Element(el)) => Some(el.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    Ok(())
}

#[test]
fn test_wrap_rejects_mixed_input() {
    let result = wrap(vec![
        Element::new("valid").into(),
        Fragment::text("not an element"),
        Element::new("also-valid").into(),
    ]);

    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MalformedFragment { index: 1 })
    ));
}

#[test]
fn test_wrap_keeps_subtrees_intact() -> Result<(), retag::Error> {
    let element = Element::new("doc")
        .attr("id", "1")
        .child(Element::new("name").text("Ada"));
    let trees = wrap(vec![element.clone().into()])?;

    assert_eq!(
        trees.first().and_then(|tree| tree.elements.first()),
        Some(&Fragment::Element(element))
    );
    Ok(())
}
