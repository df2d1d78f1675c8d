use crate::rope::Rope;
use crate::RopeError;

#[test]
fn length_is_additive() {
    let rope = Rope::from("ab") + Rope::from("cd");
    assert_eq!(rope.len(), 4);
    assert_eq!((3 * Rope::from("ab")).len(), 6);
    assert_eq!(Rope::new().len(), 0);
    assert!(Rope::new().is_empty());
}

#[test]
fn concatenation_indexing_descends() {
    let rope = Rope::from("ab") + Rope::from("cd");
    assert_eq!(rope.get(0), Some('a'));
    assert_eq!(rope.get(2), Some('c'));
    assert_eq!(rope.get(3), Some('d'));
    assert_eq!(rope.get(4), None);
}

#[test]
fn repetition_indexing_reduces_modulo_inner() {
    let rope = 3 * Rope::from("abc");
    assert_eq!(rope.len(), 9);
    assert_eq!(rope.get(7), Some('b'));
    assert_eq!(rope.get(8), Some('c'));
    assert_eq!(rope.get(9), None);
}

#[test]
fn iteration_is_left_to_right() {
    let rope = 2 * (Rope::from("ab") + Rope::from("c"));
    assert_eq!(rope.chars().collect::<String>(), "abcabc");
    assert_eq!(rope.rev_chars().collect::<String>(), "cbacba");
}

#[test]
fn reverse_iteration_of_nested_shapes() {
    let rope = Rope::from("ab") + 2 * Rope::from("xy");
    assert_eq!(rope.to_string(), "abxyxy");
    assert_eq!(rope.rev_chars().collect::<String>(), "yxyxba");
}

#[test]
fn slicing_realizes_the_range() {
    let rope = Rope::from("hello");
    assert_eq!(rope.slice(1..4), Rope::from("ell"));
    assert_eq!(rope.slice(3..10), Rope::from("lo"));
    assert_eq!(rope.slice(4..2), Rope::new());
    assert_eq!((2 * Rope::from("ab")).slice(1..3), Rope::from("ba"));
}

#[test]
fn insertion() {
    let rope = Rope::from("hello").inserted(2, &Rope::from("XX"));
    assert_eq!(rope, Rope::from("heXXllo"));
    assert_eq!(
        Rope::from("ab").inserted(0, &Rope::from("x")),
        Rope::from("xab")
    );
    assert_eq!(
        Rope::from("ab").inserted(2, &Rope::from("x")),
        Rope::from("abx")
    );
}

#[test]
fn deletion_round_trips_insertion() {
    let rope = Rope::from("concurrent");
    let inserted = rope.inserted(3, &Rope::from("!!"));
    assert_eq!(inserted.deleted(3, &Rope::from("!!")).unwrap(), rope);
}

#[test]
fn deletion_preconditions() {
    let rope = Rope::from("abc");
    assert_eq!(
        rope.deleted(10, &Rope::from("x")),
        Err(RopeError::OutOfBounds {
            position: 10,
            length: 3
        })
    );
    assert_eq!(
        rope.deleted(1, &Rope::from("xyz")),
        Err(RopeError::TooLong {
            required: 3,
            available: 2
        })
    );
    assert_eq!(
        rope.deleted(0, &Rope::from("x")),
        Err(RopeError::Mismatch {
            expected: "x".to_string(),
            found: "a".to_string()
        })
    );
}

#[test]
fn equality_is_observational() {
    assert_eq!(Rope::from("abab"), 2 * Rope::from("ab"));
    assert_eq!(
        Rope::from("ab") + Rope::from("cd"),
        Rope::from("a") + Rope::from("bcd")
    );
    assert_eq!(Rope::from(""), Rope::new());
}

#[test]
fn equality_requires_equal_lengths() {
    // A prefix is not equal to the whole, even though parallel iteration
    // agrees on every position it visits.
    assert_ne!(Rope::from("ab"), Rope::from("abc"));
    assert_ne!(Rope::from("abc"), Rope::from("ab"));
    assert_ne!(Rope::new(), Rope::from("a"));
}

#[test]
fn join_intersperses_the_separator() {
    let separator = Rope::from(", ");
    let joined = separator.join([Rope::from("a"), Rope::from("b"), Rope::from("c")]);
    assert_eq!(joined, Rope::from("a, b, c"));
    assert_eq!(separator.join([]), Rope::new());
    assert_eq!(separator.join([Rope::from("a")]), Rope::from("a"));
}

#[test]
fn repetition_normalizes() {
    assert!((0 * Rope::from("ab")).is_empty());
    assert_eq!(1 * Rope::from("ab"), Rope::from("ab"));
    assert!((4 * Rope::new()).is_empty());
    assert_eq!(Rope::repeated(2, Rope::from("a")).len(), 2);
}

#[test]
fn display_flattens() {
    let rope = Rope::from("ab") + 2 * Rope::from("c");
    assert_eq!(rope.to_string(), "abcc");
    assert_eq!(Rope::from('x').to_string(), "x");
    assert_eq!(Rope::from(String::from("owned")).to_string(), "owned");
}

#[test]
fn multibyte_code_points_count_once() {
    let rope = Rope::from("äöü");
    assert_eq!(rope.len(), 3);
    assert_eq!(rope.get(1), Some('ö'));
    assert_eq!(rope.slice(1..3), Rope::from("öü"));
}

#[test]
fn shared_subtrees_stay_valid() {
    let base = Rope::from("shared");
    let extended = base.clone() + Rope::from("!");
    assert_eq!(base.to_string(), "shared");
    assert_eq!(extended.to_string(), "shared!");
}
