use crate::regex::{parse, Alphabet, ClassItem, Input, Language, Parser, Regex};
use std::collections::BTreeSet;

fn character(c: char) -> Regex {
    Regex::Character(c)
}

#[test]
fn epsilon() {
    assert_eq!(parse("").unwrap(), Regex::Epsilon);
}

#[test]
fn single_character() {
    assert_eq!(parse("a").unwrap(), character('a'));
}

#[test]
fn concatenation() {
    assert_eq!(
        parse("ab").unwrap(),
        Regex::concatenation(character('a'), character('b'))
    );
}

#[test]
fn union() {
    assert_eq!(
        parse("a|b").unwrap(),
        Regex::union(character('a'), character('b'))
    );
}

#[test]
fn union_is_right_associative() {
    assert_eq!(
        parse("a|b|c").unwrap(),
        Regex::union(
            character('a'),
            Regex::union(character('b'), character('c'))
        )
    );
}

#[test]
fn zero_or_more() {
    assert_eq!(parse("a*").unwrap(), Regex::repetition(character('a')));
}

#[test]
fn zero_or_more_missing_repeatable() {
    let error = parse("*").unwrap_err();
    assert_eq!(error.reason, "* is not preceded by a repeatable expression");
    assert_eq!(error.annotation, "*\n^");
}

#[test]
fn one_or_more_desugars() {
    assert_eq!(
        parse("a+").unwrap(),
        Regex::concatenation(character('a'), Regex::repetition(character('a')))
    );
}

#[test]
fn one_or_more_repeats_the_rightmost_run() {
    // The copy made for `+` is itself the rightmost atom, so `ab+` repeats the
    // whole preceding run rather than just `b`.
    assert_eq!(
        parse("ab+").unwrap(),
        Regex::concatenation(
            Regex::concatenation(character('a'), character('b')),
            Regex::repetition(Regex::concatenation(character('a'), character('b')))
        )
    );
}

#[test]
fn one_or_more_missing_repeatable() {
    let error = parse("+").unwrap_err();
    assert_eq!(error.reason, "+ is not preceded by a repeatable expression");
    assert_eq!(error.annotation, "+\n^");
}

#[test]
fn repetition_applies_to_rightmost_atom() {
    assert_eq!(
        parse("ab*").unwrap(),
        Regex::concatenation(character('a'), Regex::repetition(character('b')))
    );
}

#[test]
fn group() {
    assert_eq!(parse("(a)").unwrap(), Regex::group(character('a')));
}

#[test]
fn group_missing_begin() {
    let error = parse("a)").unwrap_err();
    assert_eq!(error.reason, "found unmatched )");
    assert_eq!(error.annotation, "a)\n ^");
}

#[test]
fn group_missing_end() {
    let error = parse("(a").unwrap_err();
    assert_eq!(
        error.reason,
        "unexpected end of string, expected ) corresponding to ("
    );
    assert_eq!(error.annotation, "(a\n^-^");
}

#[test]
fn group_closed_with_wrong_marker() {
    let error = parse("(a]").unwrap_err();
    assert_eq!(error.reason, "expected ) corresponding to (, got ]");
    assert_eq!(error.annotation, "(a]\n^-^");
}

#[test]
fn either() {
    assert_eq!(
        parse("[ab]").unwrap(),
        Regex::Either(BTreeSet::from([
            ClassItem::Character('a'),
            ClassItem::Character('b'),
        ]))
    );
}

#[test]
fn either_missing_begin() {
    let error = parse("ab]").unwrap_err();
    assert_eq!(error.reason, "found unmatched ]");
    assert_eq!(error.annotation, "ab]\n  ^");
}

#[test]
fn either_missing_end() {
    let error = parse("[ab").unwrap_err();
    assert_eq!(
        error.reason,
        "unexpected end of string, expected ] corresponding to ["
    );
    assert_eq!(error.annotation, "[ab\n^--^");
}

#[test]
fn neither() {
    assert_eq!(
        parse("[^ab]").unwrap(),
        Regex::Neither(
            BTreeSet::from([ClassItem::Character('a'), ClassItem::Character('b')]),
            Alphabet::Full
        )
    );
}

#[test]
fn class_range() {
    assert_eq!(
        parse("[a-c]").unwrap(),
        Regex::Either(BTreeSet::from([ClassItem::Range('a', 'c', Alphabet::Full)]))
    );
}

#[test]
fn class_escape_is_literal() {
    assert_eq!(
        parse("[a\\-]").unwrap(),
        Regex::Either(BTreeSet::from([
            ClassItem::Character('a'),
            ClassItem::Character('-'),
        ]))
    );
}

#[test]
fn range_missing_start() {
    let error = parse("[-c]").unwrap_err();
    assert_eq!(error.reason, "range is missing start");
    assert_eq!(error.annotation, "[-c]\n^");
}

#[test]
fn range_missing_end() {
    let error = parse("[a-]").unwrap_err();
    assert_eq!(error.reason, "expected character, found instruction: ]");
    assert_eq!(error.annotation, "[a-]\n   ^");
}

#[test]
fn escape_at_end_of_string() {
    let error = parse("a\\").unwrap_err();
    assert_eq!(
        error.reason,
        "unexpected end of string, following escape character"
    );
    assert_eq!(error.annotation, "a\\\n  ^");
}

#[test]
fn escaped_marker_is_literal() {
    assert_eq!(parse("\\*").unwrap(), character('*'));
}

#[test]
fn any() {
    let parser = Parser::with_alphabet(Language::default(), Alphabet::from("ab"));
    assert_eq!(parser.parse(".").unwrap(), Regex::Any(Alphabet::from("ab")));
}

#[test]
fn custom_language() {
    let language = Language::default().with_union('/').with_any('_');
    let parser = Parser::new(language);
    assert_eq!(
        parser.parse("a/b").unwrap(),
        Regex::union(character('a'), character('b'))
    );
    assert_eq!(parser.parse("_").unwrap(), Regex::Any(Alphabet::Full));
    // The default markers carry no meaning in the custom language.
    assert_eq!(
        parser.parse("a|b").unwrap(),
        Regex::concatenation(
            Regex::concatenation(character('a'), character('|')),
            character('b')
        )
    );
}

#[test]
fn language_equality_compares_markers() {
    assert_eq!(Language::default(), Language::default());
    assert_ne!(Language::default(), Language::default().with_union('/'));
}

#[test]
fn surface_round_trip() {
    let language = Language::default();
    for pattern in [
        "",
        "a",
        "ab",
        "a|b*",
        "(ab)+",
        "[ab]c",
        "[^ab]",
        "[a-c]x|y*",
        "\\*a",
        "(a|b)c.",
    ] {
        let regex = parse(pattern).unwrap();
        let surface = language.format(&regex);
        assert_eq!(parse(&surface).unwrap(), regex, "pattern {:?}", pattern);
    }
}

#[test]
fn input_cursor_and_annotations() {
    let mut input = Input::new("abc");
    assert_eq!(input.lookahead(1), Some('a'));
    assert_eq!(input.lookahead(3), Some('c'));
    assert_eq!(input.lookahead(4), None);
    assert_eq!(input.lookahead_inclusive(2), ['a', 'b']);
    assert!(!input.is_consumed());

    assert_eq!(input.next(), Some('a'));
    assert_eq!(input.position(), 1);
    input.consume(2);
    assert!(input.is_consumed());
    assert_eq!(input.next(), None);

    let input = Input::new("abc");
    assert_eq!(input.annotated(1), "abc\n ^");
    assert_eq!(input.annotated_range(0, 2), "abc\n^-^");
    assert_eq!(input.annotated_range(1, 1), "abc\n ^");
}
