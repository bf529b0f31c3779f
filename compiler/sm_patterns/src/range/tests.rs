use std::collections::{LinkedList, VecDeque};

use pretty_assertions::assert_eq;

use super::*;

// rest_span

#[test]
fn rest_span_covers_middle() {
    // [1, 2, 3, 4, 5] against (first, .., last)
    assert_eq!(rest_span(5, 1, 1), Some(1..4));
}

#[test]
fn rest_span_may_be_empty() {
    assert_eq!(rest_span(2, 1, 1), Some(1..1));
    assert_eq!(rest_span(0, 0, 0), Some(0..0));
}

#[test]
fn rest_span_rejects_short_sequences() {
    assert_eq!(rest_span(1, 1, 1), None);
    assert_eq!(rest_span(3, 2, 2), None);
}

#[test]
fn rest_span_rest_first_or_last() {
    assert_eq!(rest_span(4, 0, 2), Some(0..2));
    assert_eq!(rest_span(4, 3, 0), Some(3..4));
}

// Sequence

#[test]
fn slice_views_borrow_the_original() {
    let values = vec![10, 20, 30, 40];
    let view = values.sub_view(1, 3);
    assert_eq!(view, &[20, 30]);
    assert!(std::ptr::eq(&view[0], &values[1]));
}

#[test]
fn array_reports_fixed_shape() {
    let values = [1u8, 2, 3];
    assert_eq!(<[u8; 3] as Sequence>::FIXED_LEN, Some(3));
    assert_eq!(values.shape(), Shape::Fixed { len: 3 });
    assert_eq!(values.seq_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn vec_reports_dynamic_shape() {
    let values = vec!['a', 'b'];
    assert_eq!(values.shape(), Shape::Dynamic { len: 2 });
    assert!(values.shape().is_range());
    assert_eq!(values.shape().element_count(), 2);
}

#[test]
fn deque_view_is_a_subrange() {
    let mut values = VecDeque::new();
    values.push_back(2);
    values.push_back(3);
    values.push_front(1);
    values.push_back(4);

    let view = values.sub_view(1, 3);
    assert_eq!(view.len(), 2);
    assert_eq!(view.to_vec(), vec![2, 3]);
    assert!(view == [2, 3]);
}

#[test]
fn linked_list_view_skips_to_start() {
    let values: LinkedList<i32> = (1..=5).collect();
    let view = values.sub_view(1, 4);
    assert_eq!(view.to_vec(), vec![2, 3, 4]);
    assert!(values.sub_view(5, 5).is_empty());
}

// Subrange

#[test]
fn subrange_equality_is_element_wise() {
    let left: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    let right: VecDeque<i32> = [0, 1, 2, 3].into_iter().collect();

    assert!(left.sub_view(0, 3) == right.sub_view(1, 4));
    assert!(left.sub_view(0, 2) != right.sub_view(1, 4));
    assert!(left.sub_view(0, 2) != right.sub_view(0, 2));
}

#[test]
fn subrange_iterates_repeatedly() {
    let values: LinkedList<&str> = ["x", "y"].into_iter().collect();
    let view = values.sub_view(0, 2);
    let first: Vec<_> = view.iter().collect();
    let second: Vec<_> = (&view).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(format!("{view:?}"), r#"["x", "y"]"#);
}

// TupleLike

#[test]
fn tuple_arity() {
    assert_eq!(<() as TupleLike>::ARITY, 0);
    assert_eq!((1, "two", 3.0).shape(), Shape::Tuple { arity: 3 });
    assert!(!(1,).shape().is_range());
}
