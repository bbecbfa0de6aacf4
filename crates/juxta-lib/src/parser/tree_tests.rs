use crate::test_utils::{nodes, parse};

#[test]
fn tokens_in_source_order() {
    let node = parse("[a + b] * c");
    let texts: Vec<_> = node.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
}

#[test]
fn span_covers_first_to_last_leaf() {
    let node = parse("  f (x + y)");
    let span = node.span().unwrap();
    assert_eq!((u32::from(span.start()), u32::from(span.end())), (2, 9));
}

#[test]
fn empty_tree_has_no_span() {
    let node = parse("{}");
    assert_eq!(node.span(), None);
    assert!(node.tokens().is_empty());
}

#[test]
fn accessors() {
    let node = parse("a - b");
    assert_eq!(node.label(), Some("minus2"));
    assert!(node.as_token().is_none());

    let tree = node.as_tree().unwrap();
    assert_eq!(tree.len(), 2);
    let children: Vec<_> = tree.iter().filter_map(|child| child.as_token()).collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].text, "a");

    let plus = &nodes("+")[0];
    assert_eq!(plus.symbol(), Some("+"));
    assert_eq!(plus.label(), None);
}

#[test]
fn display_is_the_outline() {
    let node = parse("f [1, 2]");
    assert_eq!(node.to_string(), node.dump());
    insta::assert_snapshot!(node, @r"
    appl2
      f
      brackets
        com2
          1
          2
    ");
}

#[test]
fn string_leaves_dump_their_source_text() {
    insta::assert_snapshot!(parse(r#"say "hi there""#), @r#"
    appl2
      say
      "hi there"
    "#);
}
