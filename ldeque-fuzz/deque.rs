//! Deque

#![no_main]

use ldeque::{Deque, mem::Metered};
use std::collections::VecDeque;

libfuzzer_sys::fuzz_target!(|data: (Vec<i8>, u8)| {
  let (elems, quota) = data;
  let mut deque = Deque::<i8, Metered>::with_strategy(Metered::with_quota(quota.into()));
  let mut model = VecDeque::new();
  for (idx, elem) in elems.into_iter().enumerate() {
    if idx % 3 == 0 {
      if deque.push_front(elem).is_ok() {
        model.push_front(elem);
      }
    } else if deque.push_back(elem).is_ok() {
      model.push_back(elem);
    }
    if idx % 5 == 0 {
      assert_eq!(deque.pop_front().ok(), model.pop_front());
    }
  }
  assert_eq!(deque.len(), model.len());
  assert_eq!(deque.front(), model.front());
  assert_eq!(deque.back(), model.back());
});
