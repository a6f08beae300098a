use super::*;
use crate::lex;
use mj_diagnostic::Diagnostic;
use pretty_assertions::assert_eq;

fn kinds(source: &str, dialect: Dialect) -> Vec<TokenKind> {
    let reporter = ErrorReporter::new();
    lex(source, dialect, &reporter)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn lexemes(source: &str, dialect: Dialect) -> (Vec<(TokenKind, String)>, Vec<Diagnostic>) {
    let reporter = ErrorReporter::new();
    let tokens = lex(source, dialect, &reporter)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect();
    (tokens, reporter.diagnostics())
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}

// ─── Operators ───

#[test]
fn operator_dispatch() {
    use TokenKind::*;
    assert_eq!(
        kinds("= == += -= *= %= |= &= /= ++ -- + - ! != < <= > >= || && | & * % ~ /", Dialect::Mini),
        vec![
            Assign,
            CompareOp,
            CompoundAssign,
            CompoundAssign,
            CompoundAssign,
            CompoundAssign,
            CompoundAssign,
            CompoundAssign,
            CompoundAssign,
            IncDec,
            IncDec,
            GenericOp,
            GenericOp,
            UnaryOp,
            CompareOp,
            LeftChevron,
            CompareOp,
            RightChevron,
            CompareOp,
            BinaryOp,
            BinaryOp,
            BinaryOp,
            BinaryOp,
            BinaryOp,
            BinaryOp,
            BinaryOp,
            BinaryOp,
            Eot,
        ]
    );
}

#[test]
fn operators_consume_at_most_two_chars() {
    let (tokens, _) = lexemes("+++", Dialect::Mini);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::IncDec, "++".to_string()),
            (TokenKind::GenericOp, "+".to_string()),
            (TokenKind::Eot, String::new()),
        ]
    );
    let (tokens, _) = lexemes("a>>b", Dialect::Extended);
    assert_eq!(tokens[1], (TokenKind::RightChevron, ">".to_string()));
    assert_eq!(tokens[2], (TokenKind::RightChevron, ">".to_string()));
}

// ─── Words ───

#[test]
fn words_classify_per_dialect() {
    use TokenKind::*;
    let src = "class try public static int Foo true";
    assert_eq!(
        kinds(src, Dialect::Mini),
        vec![Class, Ident, Protection, Modifier, IntType, Ident, BoolLiteral, Eot]
    );
    assert_eq!(
        kinds(src, Dialect::Extended),
        vec![Class, Try, Protection, Modifier, IntType, Ident, BoolLiteral, Eot]
    );
}

#[test]
fn underscore_and_dollar_start_words_only_in_extended() {
    let (tokens, diagnostics) = lexemes("_x $y", Dialect::Extended);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "_x".to_string()),
            (TokenKind::Ident, "$y".to_string()),
            (TokenKind::Eot, String::new()),
        ]
    );
    assert!(diagnostics.is_empty());

    let (tokens, diagnostics) = lexemes("_x", Dialect::Mini);
    assert_eq!(
        tokens,
        vec![(TokenKind::Ident, "x".to_string()), (TokenKind::Eot, String::new())]
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0001]);
}

#[test]
fn words_continue_through_digits_and_underscores() {
    let (tokens, _) = lexemes("a_1$b2", Dialect::Mini);
    assert_eq!(tokens[0], (TokenKind::Ident, "a_1$b2".to_string()));
}

// ─── Numbers ───

#[test]
fn integer_and_float_literals() {
    let (tokens, diagnostics) = lexemes("42 3.14 7.", Dialect::Mini);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::IntLiteral, "42".to_string()),
            (TokenKind::FloatLiteral, "3.14".to_string()),
            (TokenKind::FloatLiteral, "7.".to_string()),
            (TokenKind::Eot, String::new()),
        ]
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn letter_after_digits_is_reported_and_starts_next_token() {
    let (tokens, diagnostics) = lexemes("12abc", Dialect::Mini);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::IntLiteral, "12".to_string()),
            (TokenKind::Ident, "abc".to_string()),
            (TokenKind::Eot, String::new()),
        ]
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0003]);
    assert_eq!(diagnostics[0].message, "Invalid character while parsing number: a");
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 3)));
}

// ─── Strings and characters ───

#[test]
fn string_literal_keeps_quotes_and_spaces() {
    let (tokens, diagnostics) = lexemes("\"hi there\";", Dialect::Mini);
    assert_eq!(tokens[0], (TokenKind::StringLiteral, "\"hi there\"".to_string()));
    assert_eq!(tokens[1].0, TokenKind::Semicolon);
    assert!(diagnostics.is_empty());
}

#[test]
fn unterminated_string_ends_input() {
    let (tokens, diagnostics) = lexemes("x = \"abc", Dialect::Mini);
    assert_eq!(
        tokens.iter().map(|t| t.0).collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Eot]
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0008]);
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 5)));
}

#[test]
fn char_literals() {
    let (tokens, diagnostics) = lexemes("'a'", Dialect::Mini);
    assert_eq!(tokens[0], (TokenKind::CharLiteral, "'a'".to_string()));
    assert!(diagnostics.is_empty());
}

#[test]
fn newline_right_after_quote_is_the_content() {
    let (tokens, diagnostics) = lexemes("'\n' x", Dialect::Mini);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::CharLiteral, "'\n'".to_string()),
            (TokenKind::Ident, "x".to_string()),
            (TokenKind::Eot, String::new()),
        ]
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn char_literal_errors_still_emit_a_token() {
    let cases = [
        ("''", ErrorCode::E0005),
        ("'ab'", ErrorCode::E0006),
        ("'a\n", ErrorCode::E0004),
        ("'", ErrorCode::E0004),
        ("'ab", ErrorCode::E0004),
    ];
    for (source, code) in cases {
        let (tokens, diagnostics) = lexemes(source, Dialect::Mini);
        assert_eq!(tokens[0].0, TokenKind::CharLiteral, "source {source:?}");
        assert_eq!(codes(&diagnostics), vec![code], "source {source:?}");
    }
}

// ─── Punctuation ───

#[test]
fn ellipsis_only_in_extended() {
    use TokenKind::*;
    assert_eq!(kinds("...", Dialect::Extended), vec![Ellipsis, Eot]);
    assert_eq!(kinds("...", Dialect::Mini), vec![Dot, Dot, Dot, Eot]);
    assert_eq!(kinds("a.b", Dialect::Extended), vec![Ident, Dot, Ident, Eot]);
}

#[test]
fn double_dot_ends_input_in_extended() {
    let (tokens, diagnostics) = lexemes("a .. b", Dialect::Extended);
    assert_eq!(
        tokens.iter().map(|t| t.0).collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Eot]
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0007]);
}

#[test]
fn punctuation_table() {
    use TokenKind::*;
    assert_eq!(
        kinds("{ } ( ) [ ] ; , : ?", Dialect::Mini),
        vec![LBrace, RBrace, LParen, RParen, LBracket, RBracket, Semicolon, Comma, Colon, Question, Eot]
    );
}

// ─── Comments ───

#[test]
fn comments_do_not_change_the_token_stream() {
    let reporter = ErrorReporter::new();
    let with = lex(
        "int /* a\n block */ x; // trailing\n/**/y/***/ = 1;",
        Dialect::Mini,
        &reporter,
    );
    let without = lex("int x;\ny = 1;", Dialect::Mini, &reporter);
    let pairs = |tokens: &[Token]| -> Vec<(TokenKind, String)> {
        tokens.iter().map(|t| (t.kind, t.text.clone())).collect()
    };
    assert_eq!(pairs(&with), pairs(&without));
    assert!(!reporter.has_errors());
}

#[test]
fn unterminated_block_comment_reports_once_then_eot() {
    let reporter = ErrorReporter::new();
    let mut scanner = Scanner::new("x /* never closed", Dialect::Mini, &reporter);
    assert_eq!(scanner.scan().kind, TokenKind::Ident);
    assert_eq!(scanner.scan().kind, TokenKind::Eot);
    assert_eq!(scanner.scan().kind, TokenKind::Eot);
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.diagnostics()[0].code, ErrorCode::E0002);
}

#[test]
fn slash_closing_star_must_follow_opening() {
    let (_, diagnostics) = lexemes("/*/", Dialect::Mini);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0002]);
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(kinds("a // no newline", Dialect::Mini), vec![TokenKind::Ident, TokenKind::Eot]);
}

#[test]
fn slash_forms() {
    use TokenKind::*;
    assert_eq!(kinds("a / b /= c", Dialect::Mini), vec![Ident, BinaryOp, Ident, CompoundAssign, Ident, Eot]);
}

// ─── Positions ───

#[test]
fn positions_are_first_character() {
    let reporter = ErrorReporter::new();
    let tokens = lex("class A {\n  int x;\n}", Dialect::Mini, &reporter);
    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line(), t.column())).collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 7), (1, 9), (2, 3), (2, 7), (2, 8), (3, 1), (3, 2)]
    );
}

#[test]
fn positions_after_multiline_comment() {
    let reporter = ErrorReporter::new();
    let tokens = lex("/* a\n b */ int", Dialect::Mini, &reporter);
    assert_eq!(tokens[0].kind, TokenKind::IntType);
    assert_eq!(tokens[0].position, Position::new(2, 7));
}

// ─── Error recovery ───

#[test]
fn invalid_character_is_skipped() {
    let (tokens, diagnostics) = lexemes("a # b", Dialect::Mini);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "a".to_string()),
            (TokenKind::Ident, "b".to_string()),
            (TokenKind::Eot, String::new()),
        ]
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0001]);
    assert_eq!(diagnostics[0].message, "Invalid character '#' encountered while scanning");
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 3)));
}

#[test]
fn interior_nul_is_an_invalid_character() {
    let (tokens, diagnostics) = lexemes("a\0b", Dialect::Mini);
    assert_eq!(tokens.len(), 3);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E0001]);
    assert_eq!(diagnostics[0].message, "Invalid character '\\0' encountered while scanning");
}

#[test]
fn eot_repeats_after_end_of_input() {
    let reporter = ErrorReporter::new();
    let mut scanner = Scanner::new("x", Dialect::Mini, &reporter);
    scanner.scan();
    for _ in 0..3 {
        assert_eq!(scanner.scan().kind, TokenKind::Eot);
    }
}

#[test]
fn from_reader_scans_bytes() {
    let reporter = ErrorReporter::new();
    let mut scanner = Scanner::from_reader("int".as_bytes(), Dialect::Extended, &reporter).unwrap();
    assert_eq!(scanner.dialect(), Dialect::Extended);
    assert_eq!(scanner.scan().kind, TokenKind::IntType);
}

// ─── Property tests ───

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn always_terminates_with_one_eot(source in "\\PC{0,200}") {
            for dialect in [Dialect::Mini, Dialect::Extended] {
                let reporter = ErrorReporter::new();
                let tokens = lex(&source, dialect, &reporter);
                let eots = tokens.iter().filter(|t| t.is(TokenKind::Eot)).count();
                prop_assert_eq!(eots, 1);
                prop_assert!(tokens.last().is_some_and(|t| t.is(TokenKind::Eot)));
            }
        }

        #[test]
        fn positions_never_decrease(
            source in proptest::collection::vec(
                prop_oneof![
                    Just("a"), Just(" "), Just("\n"), Just("/*"), Just("*/"),
                    Just("//"), Just("'"), Just("\""), Just("1."), Just("+="), Just("#"),
                ],
                0..64,
            )
        ) {
            let source = source.concat();
            let reporter = ErrorReporter::new();
            let tokens = lex(&source, Dialect::Extended, &reporter);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].position <= pair[1].position, "{:?} then {:?}", pair[0], pair[1]);
            }
        }
    }
}
