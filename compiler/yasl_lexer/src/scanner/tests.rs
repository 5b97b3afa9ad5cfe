use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use yasl_diagnostic::{Diagnostic, DiagnosticConfig, ErrorCode};

/// Lex a whole source with an unlimited diagnostic queue.
fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>, StringInterner) {
    let interner = StringInterner::new();
    let mut diags = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let tokens = Scanner::tokenize(source, &interner, &mut diags);
    (tokens, diags.flush(), interner)
}

/// Render tokens as `KIND` or `KIND(text)` for compact comparisons.
fn kinds(tokens: &[Token], interner: &StringInterner) -> Vec<String> {
    tokens
        .iter()
        .map(|t| match t.kind.text(interner) {
            Some(text) => format!("{}({text})", t.kind.kind_name()),
            None => t.kind.kind_name().to_string(),
        })
        .collect()
}

#[test]
fn empty_source_is_just_eof() {
    let (tokens, diags, interner) = lex("");
    assert_eq!(kinds(&tokens, &interner), vec!["EOF"]);
    assert_eq!(tokens[0].pos, Pos::START);
    assert!(diags.is_empty());
}

#[test]
fn leading_zero_is_always_a_single_token() {
    // `0` never merges with following digits.
    let (tokens, diags, interner) = lex("0123");
    assert_eq!(kinds(&tokens, &interner), vec!["NUM(0)", "NUM(123)", "EOF"]);
    assert!(diags.is_empty());

    let (tokens, _, interner) = lex("00");
    assert_eq!(kinds(&tokens, &interner), vec!["NUM(0)", "NUM(0)", "EOF"]);

    let (tokens, _, interner) = lex("0;");
    assert_eq!(kinds(&tokens, &interner), vec!["NUM(0)", "SEMI", "EOF"]);
}

#[test]
fn digit_runs_are_maximal() {
    let (tokens, diags, interner) = lex("123 45 6");
    assert_eq!(
        kinds(&tokens, &interner),
        vec!["NUM(123)", "NUM(45)", "NUM(6)", "EOF"]
    );
    assert!(diags.is_empty());
}

#[test]
fn num_position_is_the_first_digit() {
    let (tokens, _, _) = lex("  987");
    assert_eq!(tokens[0].pos, Pos::new(1, 3));
}

#[test]
fn all_keywords_resolve_without_text() {
    let (tokens, diags, interner) = lex("program print mod div val begin end ");
    assert_eq!(
        kinds(&tokens, &interner),
        vec!["PROGRAM", "PRINT", "MOD", "DIV", "VAL", "BEGIN", "END", "EOF"]
    );
    for token in &tokens {
        assert_eq!(token.kind.text(&interner), None);
    }
    assert!(diags.is_empty());
}

#[test]
fn non_keywords_are_identifiers_with_text() {
    let (tokens, _, interner) = lex("programs x end_ counter2 ");
    assert_eq!(
        kinds(&tokens, &interner),
        vec!["ID(programs)", "ID(x)", "ID(end_)", "ID(counter2)", "EOF"]
    );
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    let (tokens, _, interner) = lex("Program BEGIN End ");
    assert_eq!(
        kinds(&tokens, &interner),
        vec!["ID(Program)", "ID(BEGIN)", "ID(End)", "EOF"]
    );
}

#[test]
fn operators_and_punctuation() {
    let (tokens, diags, interner) = lex("+-*;.=");
    assert_eq!(
        kinds(&tokens, &interner),
        vec!["PLUS", "MINUS", "STAR", "SEMI", "PERIOD", "ASSIGN", "EOF"]
    );
    let columns: Vec<u32> = tokens.iter().map(|t| t.pos.column).collect();
    assert_eq!(columns, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(diags.is_empty());
}

#[test]
fn assignment_statement_positions() {
    let (tokens, _, interner) = lex("x = 5;");
    assert_eq!(
        kinds(&tokens, &interner),
        vec!["ID(x)", "ASSIGN", "NUM(5)", "SEMI", "EOF"]
    );
    assert_eq!(tokens[0].pos, Pos::new(1, 1));
    assert_eq!(tokens[1].pos, Pos::new(1, 3));
    assert_eq!(tokens[2].pos, Pos::new(1, 5));
    assert_eq!(tokens[3].pos, Pos::new(1, 6));
}

#[test]
fn line_comment_is_skipped_through_newline() {
    let (tokens, diags, interner) = lex("// ignored\nval");
    assert_eq!(kinds(&tokens, &interner), vec!["VAL", "EOF"]);
    assert_eq!(tokens[0].pos, Pos::new(2, 1));
    assert!(diags.is_empty());
}

#[test]
fn line_comment_at_eof_without_newline() {
    let (tokens, diags, interner) = lex("val // trailing");
    assert_eq!(kinds(&tokens, &interner), vec!["VAL", "EOF"]);
    assert!(diags.is_empty());
}

#[test]
fn block_comment_is_skipped() {
    let (tokens, diags, interner) = lex("/* a * b */+");
    assert_eq!(kinds(&tokens, &interner), vec!["PLUS", "EOF"]);
    assert_eq!(tokens[0].pos, Pos::new(1, 12));
    assert!(diags.is_empty());
}

#[test]
fn block_comment_with_star_runs() {
    let (tokens, diags, interner) = lex("/**** x ***/ .");
    assert_eq!(kinds(&tokens, &interner), vec!["PERIOD", "EOF"]);
    assert!(diags.is_empty());
}

#[test]
fn block_comment_spanning_lines() {
    let (tokens, _, interner) = lex("/* one\ntwo */ begin");
    assert_eq!(kinds(&tokens, &interner), vec!["BEGIN", "EOF"]);
    assert_eq!(tokens[0].pos, Pos::new(2, 8));
}

#[test]
fn unterminated_block_comment_reports_and_recovers() {
    let (tokens, diags, interner) = lex("/* never closed");
    assert_eq!(kinds(&tokens, &interner), vec!["EOF"]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0003);
}

#[test]
fn bad_comment_marker_does_not_consume_the_follower() {
    // `/x`: the error is reported, then `x` lexes normally.
    let (tokens, diags, interner) = lex("/x");
    assert_eq!(kinds(&tokens, &interner), vec!["ID(x)", "EOF"]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0002);

    let (tokens, diags, interner) = lex("/+");
    assert_eq!(kinds(&tokens, &interner), vec!["PLUS", "EOF"]);
    assert_eq!(diags[0].code, ErrorCode::E0002);
}

#[test]
fn unexpected_character_is_skipped() {
    let (tokens, diags, interner) = lex("a ? 1");
    assert_eq!(kinds(&tokens, &interner), vec!["ID(a)", "NUM(1)", "EOF"]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0001);
    assert_eq!(diags[0].pos, Pos::new(1, 3));
}

#[test]
fn unexpected_character_inside_identifier_run_continues_it() {
    // `(` neither extends nor terminates a word run: it is reported and
    // skipped, and accumulation continues.
    let (tokens, diags, interner) = lex("ab(cd ");
    assert_eq!(kinds(&tokens, &interner), vec!["ID(abcd)", "EOF"]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0001);
    assert_eq!(diags[0].pos, Pos::new(1, 3));
}

#[test]
fn identifier_cannot_start_with_underscore() {
    let (tokens, diags, interner) = lex("_x");
    assert_eq!(kinds(&tokens, &interner), vec!["ID(x)", "EOF"]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0001);
}

#[test]
fn eof_is_idempotent_at_a_fixed_position() {
    let interner = StringInterner::new();
    let mut diags = DiagnosticQueue::new();
    let mut scanner = Scanner::new("val x", &interner);

    let mut token = scanner.next(&mut diags);
    while !token.is_eof() {
        token = scanner.next(&mut diags);
    }
    let eof_pos = token.pos;

    for _ in 0..5 {
        let again = scanner.next(&mut diags);
        assert!(again.is_eof());
        assert_eq!(again.pos, eof_pos);
    }
}

#[test]
fn small_program_lexes_cleanly() {
    let source = "program demo;\nval x = 0;\nbegin\n  x = x + 1;\n  print x;\nend.\n";
    let (tokens, diags, interner) = lex(source);
    assert_eq!(
        kinds(&tokens, &interner),
        vec![
            "PROGRAM",
            "ID(demo)",
            "SEMI",
            "VAL",
            "ID(x)",
            "ASSIGN",
            "NUM(0)",
            "SEMI",
            "BEGIN",
            "ID(x)",
            "ASSIGN",
            "ID(x)",
            "PLUS",
            "NUM(1)",
            "SEMI",
            "PRINT",
            "ID(x)",
            "SEMI",
            "END",
            "PERIOD",
            "EOF"
        ]
    );
    assert!(diags.is_empty());
}

proptest! {
    /// Any digit run not starting with `0` lexes to one NUM token whose
    /// text is the maximal contiguous run.
    #[test]
    fn digit_runs_lex_to_one_num(run in "[1-9][0-9]{0,8}") {
        let (tokens, diags, interner) = lex(&run);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind.text(&interner), Some(run.as_str()));
        prop_assert!(tokens[1].is_eof());
        prop_assert!(diags.is_empty());
    }

    /// Any alphabetic-led alphanumeric/underscore run followed by a
    /// delimiter lexes to exactly one ID or keyword token.
    #[test]
    fn word_runs_lex_to_one_token(run in "[a-zA-Z][a-zA-Z0-9_]{0,10}") {
        let source = format!("{run};");
        let (tokens, diags, interner) = lex(&source);
        prop_assert_eq!(tokens.len(), 3);
        match tokens[0].kind {
            TokenKind::Id(name) => prop_assert_eq!(interner.lookup(name), run.as_str()),
            kind => prop_assert_eq!(kind.spelling(), Some(run.as_str())),
        }
        prop_assert_eq!(tokens[1].kind, TokenKind::Semi);
        prop_assert!(diags.is_empty());
    }
}
