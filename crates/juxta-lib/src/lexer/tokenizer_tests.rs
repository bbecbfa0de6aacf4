use indoc::indoc;
use juxta_core::LexicalSyntax;

use super::{Chunks, LexError, Lexicon, Tokenizer};
use crate::test_utils::{lex, standard, token_lines};
use crate::token::{TokenKind, TokenValue};

fn lexicon(configure: impl FnOnce(&mut LexicalSyntax)) -> Lexicon {
    let mut syntax = LexicalSyntax::default();
    configure(&mut syntax);
    Lexicon::new(&syntax).unwrap()
}

fn first_error(source: &str) -> LexError {
    standard().tokenize(source).unwrap_err()
}

#[test]
fn token_kinds() {
    insta::assert_snapshot!(token_lines(r#"foo 12 "hi" + bar?"#), @r#"
    word "foo" @ 1:1
    numeric "12" @ 1:5
    string "\"hi\"" @ 1:8
    symbol "+" @ 1:13
    word "bar?" @ 1:15
    "#);
}

#[test]
fn newlines_coalesce_and_comments_vanish() {
    let source = indoc! {"
        a

          b # note

        c"};
    insta::assert_snapshot!(token_lines(source), @r#"
    word "a" @ 1:1
    newline "\n\n  " @ 1:2
    word "b" @ 3:3
    newline "\n\n" @ 3:11
    word "c" @ 5:1
    "#);
}

#[test]
fn comment_between_newlines_does_not_repeat_newline() {
    let kinds: Vec<_> = lex("a\n# c\n\nb").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenKind::Word, TokenKind::Newline, TokenKind::Word]);

    let b = lex("a\n# c\n\nb").pop().unwrap();
    assert_eq!((b.line, b.column), (4, 1));
}

#[test]
fn newline_emission_can_be_disabled() {
    let lexicon = lexicon(|syntax| syntax.emit_newlines = false);
    let tokens: Vec<_> = Tokenizer::new(&lexicon, "a\n\nb")
        .collect::<Result<_, _>>()
        .unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a", "b"]);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn symbols_words_and_unicode_columns() {
    insta::assert_snapshot!(token_lines("λx. x × 2"), @r#"
    symbol "λ" @ 1:1
    word "x" @ 1:2
    symbol "." @ 1:3
    word "x" @ 1:5
    symbol "×" @ 1:7
    numeric "2" @ 1:9
    "#);
}

#[test]
fn spans_are_byte_ranges_into_the_log() {
    let tokens = lex("λx × y");
    let ranges: Vec<(u32, u32)> = tokens
        .iter()
        .map(|t| (t.span.start().into(), t.span.end().into()))
        .collect();
    assert_eq!(ranges, [(0, 2), (2, 3), (4, 6), (7, 8)]);
}

#[test]
fn mid_word_and_end_word_characters() {
    insta::assert_snapshot!(token_lines("foo-bar baz- ok!! x''"), @r#"
    word "foo-bar" @ 1:1
    word "baz" @ 1:9
    symbol "-" @ 1:12
    word "ok!!" @ 1:14
    word "x''" @ 1:19
    "#);
}

#[test]
fn numeric_literals_decode() {
    let values: Vec<_> = lex("1'000.5 1'000 2.5 7.")
        .into_iter()
        .map(|t| t.value)
        .collect();
    assert_eq!(
        values,
        [
            TokenValue::Float(1000.5),
            TokenValue::Integer(1000),
            TokenValue::Float(2.5),
            TokenValue::Integer(7),
            TokenValue::Text(".".to_owned()),
        ]
    );
}

#[test]
fn grouped_literal_keeps_its_text() {
    let token = lex("1'000.5").pop().unwrap();
    assert_eq!(token.kind, TokenKind::Numeric);
    assert_eq!(token.text, "1'000.5");
}

#[test]
fn without_radix_point_only_integers() {
    let lexicon = lexicon(|syntax| syntax.radix_point = None);
    let tokens: Vec<_> = Tokenizer::new(&lexicon, "3.14")
        .collect::<Result<_, _>>()
        .unwrap();
    let values: Vec<_> = tokens.into_iter().map(|t| t.value).collect();
    assert_eq!(
        values,
        [
            TokenValue::Integer(3),
            TokenValue::Text(".".to_owned()),
            TokenValue::Integer(14),
        ]
    );
}

#[test]
fn custom_radix_point_decodes_as_float() {
    let lexicon = lexicon(|syntax| {
        syntax.radix_point = Some(',');
        syntax.group_separator = Some('_');
    });
    let token = Tokenizer::new(&lexicon, "1_234,5").next().unwrap().unwrap();
    assert_eq!(token.value, TokenValue::Float(1234.5));
}

#[test]
fn integer_overflow_is_fatal() {
    assert_eq!(
        first_error("x 99999999999999999999"),
        LexError::NumericOverflow {
            literal: "99999999999999999999".to_owned(),
            line: 1,
            column: 3,
        }
    );
}

#[test]
fn string_escapes_decode() {
    let token = lex(r#""a\nb \"q\" \\ \e\r""#).pop().unwrap();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.text, r#""a\nb \"q\" \\ \e\r""#);
    assert_eq!(token.value, TokenValue::Text("a\nb \"q\" \\ \u{1b}\r".to_owned()));
}

#[test]
fn unknown_escape_is_fatal() {
    assert_eq!(
        first_error(r#"x "bad \q""#),
        LexError::UnknownEscape {
            escape: 'q',
            line: 1,
            column: 3,
        }
    );
}

#[test]
fn unterminated_string_is_fatal() {
    let err = first_error("x\n  \"abc");
    assert_eq!(err, LexError::UnterminatedString { line: 2, column: 3 });
    assert_eq!(err.to_string(), "unterminated string (2, 3)");
}

#[test]
fn unterminated_comment_ends_quietly() {
    let texts: Vec<_> = lex("x # trailing").into_iter().map(|t| t.text).collect();
    assert_eq!(texts, ["x"]);
}

#[test]
fn unrecognized_input() {
    let lexicon = lexicon(|syntax| {
        syntax.comment = "//".to_owned();
        syntax.non_word.retain(|&c| c != '/');
    });
    let mut tokenizer = Tokenizer::new(&lexicon, "a / b");
    assert_eq!(tokenizer.next_token().unwrap().unwrap().text, "a");
    assert_eq!(
        tokenizer.next_token(),
        Err(LexError::UnrecognizedInput { line: 1, column: 3 })
    );
}

#[test]
fn errors_repeat_but_iteration_stops() {
    let mut tokenizer = standard().tokenizer("\"open");
    let err = tokenizer.next_token().unwrap_err();
    assert_eq!(tokenizer.next_token(), Err(err));
    assert!(tokenizer.next().is_none());
}

#[test]
fn string_continues_across_chunks() {
    let mut tokenizer = standard().tokenizer_with_source("\"ab", Chunks::new(["cd\"", " z"]));
    let string = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(string.value, TokenValue::Text("abcd".to_owned()));
    assert_eq!(string.text, "\"abcd\"");

    let word = tokenizer.next_token().unwrap().unwrap();
    assert_eq!((word.text.as_str(), word.line, word.column), ("z", 1, 8));
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.log(), "\"abcd\" z");
}

#[test]
fn comment_continues_across_chunks() {
    let tokenizer = standard().tokenizer_with_source("x # part", Chunks::new(["ial\n", "y"]));
    let tokens: Vec<_> = tokenizer.collect::<Result<_, _>>().unwrap();
    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.line, t.column))
        .collect();
    assert_eq!(
        summary,
        [
            (TokenKind::Word, 1, 1),
            (TokenKind::Newline, 1, 12),
            (TokenKind::Word, 2, 1),
        ]
    );
}

#[test]
fn closure_source_is_dropped_when_finished() {
    let mut lines = vec!["b\n", "c\n"].into_iter();
    let mut tokenizer =
        standard().tokenizer_with_source("a\n", move || lines.next().map(str::to_owned));
    assert!(tokenizer.has_source());

    let words: Vec<_> = tokenizer
        .by_ref()
        .filter_map(Result::ok)
        .filter(|t| t.kind == TokenKind::Word)
        .map(|t| (t.text, t.line))
        .collect();
    assert_eq!(
        words,
        [("a".to_owned(), 1), ("b".to_owned(), 2), ("c".to_owned(), 3)]
    );
    assert!(!tokenizer.has_source());
    assert_eq!(tokenizer.position(), (4, 1));
}

#[test]
fn open_string_with_finished_source_is_unterminated() {
    let mut tokenizer = standard().tokenizer_with_source("\"ab", Chunks::new(["c"]));
    assert_eq!(
        tokenizer.next_token(),
        Err(LexError::UnterminatedString { line: 1, column: 1 })
    );
}

#[test]
fn read_line_splits_on_newlines() {
    let mut tokenizer = standard().tokenizer("a b\nc\n\nd");
    let mut lines = Vec::new();
    while let Some(line) = tokenizer.read_line().unwrap() {
        lines.push(line.into_iter().map(|t| t.text).collect::<Vec<_>>());
    }
    assert_eq!(lines, [vec!["a", "b"], vec!["c"], vec!["d"]]);
}

#[test]
fn text_and_gaps_reconstruct_the_source() {
    let source = indoc! {r#"
        total := sum [1'000.5, x] # running
          ++ "tail\n" -- done!
    "#};
    let tokens = lex(source);

    let mut end = 0;
    for token in &tokens {
        let start: usize = token.span.start().into();
        let gap = &source[end..start];
        assert!(
            gap.trim().is_empty() || gap.trim_start().starts_with('#'),
            "unexpected gap {gap:?}"
        );
        assert_eq!(&source[token.span], token.text);
        end = token.span.end().into();
    }
    assert!(source[end..].trim().is_empty());
}

#[test]
fn token_text_retokenizes_to_itself() {
    let source = r#"word-ish? 1'000.25 42 "esc\"aped" + λ"#;
    for token in lex(source) {
        let again = lex(&token.text);
        assert_eq!(again.len(), 1, "{:?}", token.text);
        assert_eq!(again[0].kind, token.kind);
        assert_eq!(again[0].value, token.value);
    }
}
