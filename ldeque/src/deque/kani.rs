use crate::deque::Deque;
use alloc::collections::VecDeque;

#[kani::proof]
fn deque() {
  let elems = kani::vec::any_vec::<u8, 8>();
  let mut deque = Deque::<u8>::new();
  let mut vec_deque = VecDeque::new();

  for (idx, elem) in elems.iter().copied().enumerate() {
    if idx % 2 == 0 {
      deque.push_back(elem).unwrap();
      vec_deque.push_back(elem);
    } else {
      deque.push_front(elem).unwrap();
      vec_deque.push_front(elem);
    }
  }
  assert_eq!(deque.len(), vec_deque.len());
  loop {
    assert_eq!(deque.front(), vec_deque.front());
    assert_eq!(deque.back(), vec_deque.back());
    if deque.is_empty() {
      assert!(vec_deque.is_empty());
      break;
    }
    assert_eq!(deque.pop_front().unwrap(), vec_deque.pop_front().unwrap());
    if deque.is_empty() {
      assert!(vec_deque.is_empty());
      break;
    }
    assert_eq!(deque.pop_back().unwrap(), vec_deque.pop_back().unwrap());
  }
  assert!(deque.pop_front().is_err());
  assert!(deque.pop_back().is_err());
}
