use crate::{
  Error,
  deque::{Deque, DequeError},
  mem::Metered,
};
use alloc::string::{String, ToString};
use core::mem;

#[test]
fn default_instance_renders_empty() {
  let deque = Deque::<i32>::new();
  assert!(deque.is_empty());
  assert_eq!(deque.len(), 0);
  assert_eq!(deque.to_string(), "< >");
}

#[test]
fn from_iter_preserves_order() {
  let deque = Deque::<i32>::from_iter([1, 2, 3]).unwrap();
  assert_eq!(deque.len(), 3);
  assert_eq!(deque.to_string(), "< 1 2 3 >");
}

#[test]
fn from_cloneable_slice_preserves_order() {
  let deque = Deque::<i32>::from_cloneable_slice(&[4, 5, 6]).unwrap();
  assert_eq!(deque.to_string(), "< 4 5 6 >");
}

#[test]
fn push_front_prepends() {
  let mut deque = Deque::<i32>::new();
  deque.push_front(42).unwrap();
  deque.push_front(666).unwrap();
  assert_eq!(deque.to_string(), "< 666 42 >");
}

#[test]
fn pops_remove_from_the_named_ends() {
  let mut deque = Deque::<i32>::from_iter([666, 42, 1, 9]).unwrap();
  assert_eq!(deque.to_string(), "< 666 42 1 9 >");
  assert_eq!(deque.pop_front().unwrap(), 666);
  assert_eq!(deque.pop_back().unwrap(), 9);
  assert_eq!(deque.to_string(), "< 42 1 >");
  assert_eq!(deque.len(), 2);
}

#[test]
fn len_reflects_pushes_and_pops() {
  let mut deque = Deque::<i32>::new();
  for elem in 0..6 {
    deque.push_back(elem).unwrap();
  }
  for _ in 0..2 {
    let _elem = deque.pop_front().unwrap();
  }
  deque.push_front(-1).unwrap();
  let _elem = deque.pop_back().unwrap();
  assert_eq!(deque.len(), 4);
}

#[test]
fn empty_pop_reports_an_error_even_with_a_populated_sibling() {
  let mut populated = Deque::<i32>::new();
  populated.push_front(7).unwrap();
  let mut empty = Deque::<i32>::new();
  assert!(matches!(empty.pop_front(), Err(Error::DequeError(DequeError::PopFrontEmpty))));
  assert!(matches!(empty.pop_back(), Err(Error::DequeError(DequeError::PopBackEmpty))));
  assert_eq!(populated.pop_front().unwrap(), 7);
}

#[test]
fn accessors_refuse_empty_instances() {
  let mut deque = Deque::<i32>::new();
  assert_eq!(deque.front(), None);
  assert_eq!(deque.back(), None);
  assert_eq!(deque.front_mut(), None);
  deque.push_back(1).unwrap();
  deque.push_back(2).unwrap();
  assert_eq!(deque.front(), Some(&1));
  assert_eq!(deque.back(), Some(&2));
  *deque.front_mut().unwrap() = 10;
  *deque.back_mut().unwrap() = 20;
  assert_eq!(deque.to_string(), "< 10 20 >");
}

#[test]
fn taking_transfers_the_chain_and_empties_the_source() {
  let mut src = Deque::<i32>::from_iter([1, 2, 3]).unwrap();
  let prior = src.to_string();
  let dst = mem::take(&mut src);
  assert_eq!(dst.to_string(), prior);
  assert_eq!(src.to_string(), "< >");
  assert!(src.is_empty());
  assert_eq!(src.len(), 0);
}

#[test]
fn swapping_keeps_both_chains_intact() {
  let mut lhs = Deque::<i32>::from_iter([1, 2]).unwrap();
  let mut rhs = Deque::<i32>::from_iter([3]).unwrap();
  mem::swap(&mut lhs, &mut rhs);
  assert_eq!(lhs.to_string(), "< 3 >");
  assert_eq!(rhs.to_string(), "< 1 2 >");
}

#[test]
fn try_clone_is_deep() {
  let deque = Deque::<i32>::from_iter([1, 2, 3]).unwrap();
  let mut other = deque.try_clone().unwrap();
  assert_eq!(deque, other);
  other.push_back(4).unwrap();
  assert_eq!(other.pop_front().unwrap(), 1);
  assert_eq!(deque.to_string(), "< 1 2 3 >");
  assert_eq!(other.to_string(), "< 2 3 4 >");
}

#[test]
fn try_clone_from_replaces_previous_contents() {
  let src = Deque::<i32>::from_iter([5, 6]).unwrap();
  let mut dst = Deque::<i32>::from_iter([9, 9, 9]).unwrap();
  dst.try_clone_from(&src).unwrap();
  assert_eq!(dst.to_string(), "< 5 6 >");
  let _elem = dst.pop_back().unwrap();
  assert_eq!(src.to_string(), "< 5 6 >");
}

#[test]
fn clear_returns_every_node_to_the_strategy() {
  let mut deque = Deque::<i32, Metered>::with_strategy(Metered::new());
  deque.extend_back_from_iter([1, 2, 3]).unwrap();
  assert_eq!(deque.strategy().granted(), 3);
  deque.clear();
  assert!(deque.is_empty());
  assert_eq!(deque.len(), 0);
  assert_eq!(deque.to_string(), "< >");
  assert_eq!((deque.strategy().granted(), deque.strategy().returned()), (3, 3));
}

#[test]
fn pops_return_nodes_to_the_strategy() {
  let mut deque = Deque::<i32, Metered>::with_strategy(Metered::new());
  deque.push_back(1).unwrap();
  deque.push_front(0).unwrap();
  let _elem = deque.pop_back().unwrap();
  let _elem = deque.pop_front().unwrap();
  assert_eq!((deque.strategy().granted(), deque.strategy().returned()), (2, 2));
}

#[test]
fn failed_push_leaves_the_instance_unchanged() {
  let mut deque = Deque::<i32, Metered>::with_strategy(Metered::with_quota(2));
  deque.push_back(1).unwrap();
  deque.push_back(2).unwrap();
  assert!(matches!(
    deque.push_back(3),
    Err(Error::DequeError(DequeError::PushBackOutOfMemory))
  ));
  assert!(matches!(
    deque.push_front(0),
    Err(Error::DequeError(DequeError::PushFrontOutOfMemory))
  ));
  assert_eq!(deque.to_string(), "< 1 2 >");
  assert_eq!(deque.len(), 2);
  deque.strategy_mut().set_quota(usize::MAX);
  deque.push_front(0).unwrap();
  assert_eq!(deque.to_string(), "< 0 1 2 >");
}

#[test]
fn bulk_construction_propagates_strategy_failures() {
  let mut deque = Deque::<i32, Metered>::with_strategy(Metered::with_quota(1));
  assert!(matches!(
    deque.extend_back_from_iter([1, 2, 3]),
    Err(Error::DequeError(DequeError::PushBackOutOfMemory))
  ));
  assert_eq!(deque.to_string(), "< 1 >");
}

#[test]
fn single_element_boundaries_relink_correctly() {
  let mut deque = Deque::<i32>::new();
  deque.push_back(1).unwrap();
  assert_eq!(deque.pop_back().unwrap(), 1);
  assert!(deque.is_empty());
  deque.push_front(2).unwrap();
  assert_eq!(deque.pop_front().unwrap(), 2);
  assert!(deque.is_empty());
  deque.push_back(3).unwrap();
  deque.push_back(4).unwrap();
  assert_eq!(deque.pop_back().unwrap(), 4);
  deque.push_back(5).unwrap();
  assert_eq!(deque.to_string(), "< 3 5 >");
}

#[test]
fn extend_front_reverses_iteration_order() {
  let mut deque = Deque::<i32>::new();
  deque.extend_front_from_iter([1, 2, 3]).unwrap();
  assert_eq!(deque.to_string(), "< 3 2 1 >");
  deque.extend_back_from_iter([4]).unwrap();
  assert_eq!(deque.to_string(), "< 3 2 1 4 >");
}

#[test]
fn owned_values_move_in_and_out() {
  let mut deque = Deque::<String>::new();
  deque.push_back(String::from("ab")).unwrap();
  deque.push_front(String::from("xy")).unwrap();
  assert_eq!(deque.to_string(), "< xy ab >");
  assert_eq!(deque.pop_front().unwrap(), "xy");
  assert_eq!(deque.pop_back().unwrap(), "ab");
}
