use indoc::indoc;
use juxta_core::{Fixity, OperatorLevel, OperatorSpec, Syntax};

use crate::test_utils::standard;
use crate::{Chunks, Error, FailureKind, Frontend, LexError, TokenKind};

#[test]
fn parse_str_end_to_end() {
    let source = indoc! {"
        total := sum [1'000.5, x] # running
          ++ rest
    "};
    insta::assert_snapshot!(standard().parse_str(source).unwrap(), @r"
    def2
      total
      cat2
        appl2
          sum
          brackets
            com2
              1'000.5
              x
        rest
    ");
}

#[test]
fn parse_str_reports_lex_errors() {
    let err = standard().parse_str("a \"b").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnterminatedString { .. })));
}

#[test]
fn parse_str_reports_parse_failures() {
    let err = standard().parse_str("a +").unwrap_err();
    let failure = match err {
        Error::Parse(failure) => failure,
        other => panic!("expected a parse failure, got {other:?}"),
    };
    assert_eq!(failure.kind, FailureKind::MissingRightOperand);
}

#[test]
fn tokenize_keeps_newlines() {
    let kinds: Vec<_> = standard()
        .tokenize("a\nb")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds, [TokenKind::Word, TokenKind::Newline, TokenKind::Word]);
}

#[test]
fn streamed_lines_parse_as_one_text() {
    let frontend = standard();
    let mut tokenizer = frontend.tokenizer_with_source("f x", Chunks::new([" +\n", "  1\n"]));
    let tokens: Vec<_> = tokenizer.by_ref().collect::<Result<_, _>>().unwrap();

    let tree = frontend.parse(tokens).unwrap();
    assert_eq!(tree.label(), Some("plus2"));
    assert_eq!(tokenizer.log(), "f x +\n  1\n");
}

#[test]
fn configured_from_json() {
    let syntax = Syntax::from_json(indoc! {r#"
        {
          "lexical": { "comment": "--" },
          "operators": [
            { "fixity": "left", "operators": [{ "symbol": "+", "name": "add" }] },
            { "fixity": "right", "operators": [{ "name": "call" }] }
          ],
          "delimiters": [
            { "open": "(", "close": ")", "name": "group", "transparent": true }
          ]
        }
    "#})
    .unwrap();
    let frontend = Frontend::new(&syntax).unwrap();

    insta::assert_snapshot!(frontend.parse_str("f g x + (y) -- trailing").unwrap(), @r"
    add
      call
        f
        call
          g
          x
      y
    ");
}

#[test]
fn unknown_symbols_are_operands() {
    let mut syntax = Syntax::default();
    syntax.operators = vec![OperatorLevel::new(
        Fixity::Left,
        vec![OperatorSpec::application("seq")],
    )];
    let frontend = Frontend::new(&syntax).unwrap();

    insta::assert_snapshot!(frontend.parse_str("a + b").unwrap(), @r"
    seq
      seq
        a
        +
      b
    ");
}

#[test]
fn invalid_syntax_is_rejected_up_front() {
    let mut syntax = Syntax::default();
    syntax.lexical.comment.clear();
    let err = Frontend::new(&syntax).unwrap_err();
    assert_eq!(err.to_string(), "comment marker must not be empty");
}
