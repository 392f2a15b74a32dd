use super::*;

fn abcd() -> Vec<&'static str> {
    vec!["A", "B", "C", "D"]
}

#[test]
fn move_to_same_index_is_identity() {
    for i in 0..4 {
        assert_eq!(move_index(&abcd(), i, i), abcd());
    }
}

#[test]
fn move_second_to_end() {
    assert_eq!(move_index(&abcd(), 1, 3), vec!["A", "C", "D", "B"]);
}

#[test]
fn move_last_to_front() {
    assert_eq!(move_index(&abcd(), 3, 0), vec!["D", "A", "B", "C"]);
}

#[test]
fn move_out_of_range_is_noop() {
    assert_eq!(move_index(&abcd(), 4, 0), abcd());
    assert_eq!(move_index(&abcd(), 0, 9), abcd());
    assert_eq!(move_index::<u8>(&[], 0, 0), Vec::<u8>::new());
}

#[test]
fn drop_onto_itself_is_noop_and_replayable() {
    let once = move_by_id(&abcd(), &"C", Some(&"C"));
    let twice = move_by_id(&once, &"C", Some(&"C"));
    assert_eq!(once, abcd());
    assert_eq!(twice, abcd());
}

#[test]
fn drop_over_nothing_is_noop() {
    assert_eq!(move_by_id(&abcd(), &"B", None), abcd());
}

#[test]
fn drop_with_unknown_id_is_noop() {
    assert_eq!(move_by_id(&abcd(), &"Z", Some(&"A")), abcd());
    assert_eq!(move_by_id(&abcd(), &"A", Some(&"Z")), abcd());
}

#[test]
fn drop_moves_to_target_position() {
    assert_eq!(move_by_id(&abcd(), &"B", Some(&"D")), vec!["A", "C", "D", "B"]);
    assert_eq!(move_by_id(&abcd(), &"D", Some(&"A")), vec!["D", "A", "B", "C"]);
}

#[test]
fn every_move_is_a_permutation() {
    let ids = abcd();
    for from in 0..ids.len() {
        for to in 0..ids.len() {
            let mut moved = move_index(&ids, from, to);
            assert_eq!(moved.len(), ids.len());
            moved.sort_unstable();
            assert_eq!(moved, ids);
        }
    }
}

#[test]
fn every_move_keeps_relative_order_of_the_rest() {
    let ids = abcd();
    for from in 0..ids.len() {
        for to in 0..ids.len() {
            let moved = move_index(&ids, from, to);
            let rest_before: Vec<_> = ids.iter().filter(|id| **id != ids[from]).collect();
            let rest_after: Vec<_> = moved.iter().filter(|id| **id != ids[from]).collect();
            assert_eq!(rest_before, rest_after);
            assert_eq!(moved[to], ids[from]);
        }
    }
}
