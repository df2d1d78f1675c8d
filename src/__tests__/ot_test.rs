use crate::ot::Operation;
use crate::rope::Rope;
use crate::RopeError;

#[test]
fn derived_bounds() {
    let insert = Operation::insert(3, "BAR");
    assert_eq!(insert.start(), 3);
    assert_eq!(insert.len(), 3);
    assert_eq!(insert.end(), 6);
    assert_eq!(Operation::delete(1, "äö").len(), 2);
}

#[test]
fn undo_swaps_the_variant() {
    assert_eq!(
        Operation::insert(3, "BAR").undo(),
        Operation::delete(3, "BAR")
    );
    assert_eq!(Operation::delete(2, "OB").undo(), Operation::insert(2, "OB"));
}

#[test]
fn apply_and_undo_restore_the_document() {
    let document = Rope::from("FOOBAR");
    let delete = Operation::delete(2, "OB");
    let applied = delete.apply(&document).unwrap();
    assert_eq!(applied, Rope::from("FOAR"));
    assert_eq!(delete.undo().apply(&applied).unwrap(), document);

    let insert = Operation::insert(3, "BAZ");
    let applied = insert.apply(&document).unwrap();
    assert_eq!(applied, Rope::from("FOOBAZBAR"));
    assert_eq!(insert.undo().apply(&applied).unwrap(), document);
}

#[test]
fn apply_verifies_deleted_content() {
    let document = Rope::from("FOOBAR");
    assert_eq!(
        Operation::delete(2, "XX").apply(&document),
        Err(RopeError::Mismatch {
            expected: "XX".to_string(),
            found: "OB".to_string()
        })
    );
}

#[test]
fn insert_includes_insert() {
    let behind = Operation::insert(5, "xy");
    let ahead = Operation::insert(2, "abc");
    assert_eq!(behind.include(&ahead), vec![Operation::insert(8, "xy")]);
    assert_eq!(ahead.include(&behind), vec![ahead.clone()]);
    // On equal positions the included operation yields.
    assert_eq!(
        Operation::insert(2, "a").include(&Operation::insert(2, "bb")),
        vec![Operation::insert(4, "a")]
    );
}

#[test]
fn insert_includes_delete() {
    let delete = Operation::delete(1, "ab");
    assert_eq!(
        Operation::insert(6, "x").include(&delete),
        vec![Operation::insert(4, "x")]
    );
    // Inserts inside or at the edge of the deleted range move to its start.
    assert_eq!(
        Operation::insert(2, "x").include(&delete),
        vec![Operation::insert(1, "x")]
    );
    assert_eq!(
        Operation::insert(3, "x").include(&delete),
        vec![Operation::insert(1, "x")]
    );
    assert_eq!(
        Operation::insert(1, "x").include(&delete),
        vec![Operation::insert(1, "x")]
    );
}

#[test]
fn delete_includes_insert() {
    assert_eq!(
        Operation::delete(0, "ab").include(&Operation::insert(2, "xy")),
        vec![Operation::delete(0, "ab")]
    );
    assert_eq!(
        Operation::delete(3, "ab").include(&Operation::insert(1, "xy")),
        vec![Operation::delete(5, "ab")]
    );
    // An insert inside the deleted range splits the delete around it.
    assert_eq!(
        Operation::delete(1, "abcd").include(&Operation::insert(3, "XY")),
        vec![Operation::delete(1, "ab"), Operation::delete(5, "cd")]
    );
}

#[test]
fn delete_includes_delete() {
    // Disjoint, the other behind.
    assert_eq!(
        Operation::delete(0, "ab").include(&Operation::delete(2, "c")),
        vec![Operation::delete(0, "ab")]
    );
    // Disjoint, the other ahead.
    assert_eq!(
        Operation::delete(5, "ab").include(&Operation::delete(1, "xy")),
        vec![Operation::delete(3, "ab")]
    );
    // The other covers this delete entirely.
    assert_eq!(
        Operation::delete(2, "ab").include(&Operation::delete(1, "abcd")),
        vec![Operation::delete(2, "")]
    );
    // The other covers the head; the tail remains, repositioned.
    assert_eq!(
        Operation::delete(2, "abcd").include(&Operation::delete(1, "xyz")),
        vec![Operation::delete(1, "cd")]
    );
    // The other covers the tail.
    assert_eq!(
        Operation::delete(1, "abcd").include(&Operation::delete(3, "xy")),
        vec![Operation::delete(1, "cd")]
    );
    // The other sits inside this delete.
    assert_eq!(
        Operation::delete(1, "abcde").include(&Operation::delete(2, "bc")),
        vec![Operation::delete(1, "ade")]
    );
}

#[test]
fn include_slices_by_code_points() {
    assert_eq!(
        Operation::delete(0, "äöüë").include(&Operation::insert(2, "!")),
        vec![Operation::delete(0, "äö"), Operation::delete(3, "üë")]
    );
    assert_eq!(
        Operation::insert(3, "x").include(&Operation::delete(0, "äö")),
        vec![Operation::insert(1, "x")]
    );
}

#[test]
fn concurrent_inserts_converge() {
    let base = Rope::from("FOOBAZ");
    let first = Operation::insert(3, "BAR");
    let second = Operation::insert(5, "!!");

    let one = second.include(&first)[0]
        .apply(&first.apply(&base).unwrap())
        .unwrap();
    let two = first.include(&second)[0]
        .apply(&second.apply(&base).unwrap())
        .unwrap();

    assert_eq!(one, two);
    assert_eq!(one, Rope::from("FOOBARBA!!Z"));
}

#[test]
fn concurrent_inserts_converge_at_equal_positions() {
    let base = Rope::from("ab");
    let first = Operation::insert(1, "X");
    let second = Operation::insert(1, "Y");

    // The inclusion transformation breaks the tie in favour of the operation
    // that was applied first.
    let one = second.include(&first)[0]
        .apply(&first.apply(&base).unwrap())
        .unwrap();
    assert_eq!(one, Rope::from("aXYb"));
}

#[test]
fn serialization() {
    let insert = Operation::insert(3, "BAR");
    assert_eq!(
        serde_json::to_value(&insert).unwrap(),
        serde_json::json!({"kind": "insert", "start": 3, "string": "BAR"})
    );

    let parsed: Operation =
        serde_json::from_str(r#"{"kind":"delete","start":2,"string":"OB"}"#).unwrap();
    assert_eq!(parsed, Operation::delete(2, "OB"));

    let round_tripped: Operation =
        serde_json::from_str(&serde_json::to_string(&insert).unwrap()).unwrap();
    assert_eq!(round_tripped, insert);
}
