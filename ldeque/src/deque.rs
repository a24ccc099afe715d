// 1. Chain shape
//
// head                          tail
//  |                             |
//  v                             v
// [A] <-> [B] <-> [C] <-> [D]
//
// `head.prev` and `tail.next` are always empty. Both ends are empty if and only if the
// instance has no elements.
//
// 2. Node lifecycle
//
// A node is granted by the memory strategy inside a push operation and linked before the
// operation returns. It is detached and returned to the strategy inside a pop operation
// or during `clear`. No other code path touches node storage.

#[cfg(kani)]
mod kani;
#[cfg(test)]
mod tests;

use crate::mem::{Global, MemStrategy};
use core::{
  alloc::Layout,
  fmt::{Debug, Display, Formatter},
  marker::PhantomData,
  ptr::NonNull,
};

/// Errors of [Deque].
#[derive(Clone, Copy, Debug)]
pub enum DequeError {
  /// `pop_back` was called on an instance without elements.
  PopBackEmpty,
  /// `pop_front` was called on an instance without elements.
  PopFrontEmpty,
  /// The memory strategy refused to supply a node for `push_back`.
  PushBackOutOfMemory,
  /// The memory strategy refused to supply a node for `push_front`.
  PushFrontOutOfMemory,
}

impl Display for DequeError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl From<DequeError> for u8 {
  #[inline]
  fn from(from: DequeError) -> Self {
    match from {
      DequeError::PopBackEmpty => 0,
      DequeError::PopFrontEmpty => 1,
      DequeError::PushBackOutOfMemory => 2,
      DequeError::PushFrontOutOfMemory => 3,
    }
  }
}

impl core::error::Error for DequeError {}

struct Node<T> {
  data: T,
  next: Option<NonNull<Node<T>>>,
  prev: Option<NonNull<Node<T>>>,
}

/// A double-ended queue implemented with a doubly linked list.
///
/// Each element is stored in an individually allocated node, so pushing and popping at
/// either end is `O(1)` and never moves other elements. Node storage is managed by the
/// `M` memory strategy owned by the instance.
pub struct Deque<T, M = Global>
where
  M: MemStrategy,
{
  head: Option<NonNull<Node<T>>>,
  ms: M,
  phantom: PhantomData<T>,
  tail: Option<NonNull<Node<T>>>,
}

impl<T> Deque<T> {
  /// Creates a new empty instance.
  ///
  /// ```rust
  /// let deque = ldeque::Deque::<u8>::new();
  /// assert_eq!(deque.len(), 0);
  /// ```
  #[inline]
  pub const fn new() -> Self {
    Self::with_strategy(Global)
  }
}

impl<T, M> Deque<T, M>
where
  M: MemStrategy,
{
  /// Creates a new empty instance that manages node storage through `ms`.
  #[inline]
  pub const fn with_strategy(ms: M) -> Self {
    Self { head: None, ms, phantom: PhantomData, tail: None }
  }

  /// Constructs a new instance from an iterator, appending elements one at a time.
  ///
  /// ```rust
  /// let deque = ldeque::Deque::<u8>::from_iter([1, 2, 3]).unwrap();
  /// assert_eq!(deque.to_string(), "< 1 2 3 >");
  /// ```
  #[expect(clippy::should_implement_trait, reason = "The std trait is infallible")]
  #[inline]
  pub fn from_iter(ii: impl IntoIterator<Item = T>) -> crate::Result<Self>
  where
    M: Default,
  {
    let mut this = Self::with_strategy(M::default());
    this.extend_back_from_iter(ii)?;
    Ok(this)
  }

  /// Returns a reference to the last element, or [`Option::None`] if the instance is
  /// empty.
  #[inline]
  pub fn back(&self) -> Option<&T> {
    // SAFETY: `tail` always points to a live node owned by this instance
    self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
  }

  /// Mutable version of [`Self::back`].
  #[inline]
  pub fn back_mut(&mut self) -> Option<&mut T> {
    // SAFETY: `tail` always points to a live node owned by this instance
    self.tail.map(|node| unsafe { &mut (*node.as_ptr()).data })
  }

  /// Clears the deque, returning every node to the memory strategy.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::new();
  /// deque.push_back(1).unwrap();
  /// deque.clear();
  /// assert!(deque.is_empty());
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    let mut cur = self.head;
    while let Some(node) = cur {
      // SAFETY: nodes reachable from `head` are live
      cur = unsafe { (*node.as_ptr()).next };
      // SAFETY: `node` was granted by this instance's strategy and is not referenced
      // anymore
      let _elem = unsafe { self.release_node(node) };
    }
    self.head = None;
    self.tail = None;
  }

  /// Appends all elements of the iterator, stopping at the first error.
  #[inline]
  pub fn extend_back_from_iter(&mut self, ii: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in ii {
      self.push_back(elem)?;
    }
    Ok(())
  }

  /// Prepends all elements of the iterator, stopping at the first error.
  ///
  /// Each element is prepended in turn, which reverses the iteration order at the
  /// front.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::new();
  /// deque.extend_front_from_iter([1, 2]).unwrap();
  /// assert_eq!(deque.to_string(), "< 2 1 >");
  /// ```
  #[inline]
  pub fn extend_front_from_iter(&mut self, ii: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in ii {
      self.push_front(elem)?;
    }
    Ok(())
  }

  /// Returns a reference to the first element, or [`Option::None`] if the instance is
  /// empty.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::new();
  /// assert_eq!(deque.front(), None);
  /// deque.push_back(1).unwrap();
  /// assert_eq!(deque.front(), Some(&1));
  /// ```
  #[inline]
  pub fn front(&self) -> Option<&T> {
    // SAFETY: `head` always points to a live node owned by this instance
    self.head.map(|node| unsafe { &(*node.as_ptr()).data })
  }

  /// Mutable version of [`Self::front`].
  #[inline]
  pub fn front_mut(&mut self) -> Option<&mut T> {
    // SAFETY: `head` always points to a live node owned by this instance
    self.head.map(|node| unsafe { &mut (*node.as_ptr()).data })
  }

  /// Indicates whether there are no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Returns the number of elements.
  ///
  /// The count is not cached anywhere, so every call traverses the whole chain.
  #[inline]
  pub fn len(&self) -> usize {
    self.elements().count()
  }

  /// Removes the last element and returns it.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::<u8>::from_iter([1, 2]).unwrap();
  /// assert_eq!(deque.pop_back().unwrap(), 2);
  /// assert_eq!(deque.to_string(), "< 1 >");
  /// ```
  #[inline]
  pub fn pop_back(&mut self) -> crate::Result<T> {
    let Some(node) = self.tail else {
      _debug!("cannot pop the back element of an empty deque");
      return Err(DequeError::PopBackEmpty.into());
    };
    // SAFETY: `node` is live
    let prev = unsafe { (*node.as_ptr()).prev };
    self.tail = prev;
    match prev {
      Some(prev_node) => {
        // SAFETY: `prev_node` is live
        unsafe {
          (*prev_node.as_ptr()).next = None;
        }
      }
      None => self.head = None,
    }
    // SAFETY: `node` was detached from the chain and came from this instance's strategy
    Ok(unsafe { self.release_node(node) })
  }

  /// Removes the first element and returns it.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::<u8>::from_iter([1, 2]).unwrap();
  /// assert_eq!(deque.pop_front().unwrap(), 1);
  /// assert_eq!(deque.to_string(), "< 2 >");
  /// ```
  #[inline]
  pub fn pop_front(&mut self) -> crate::Result<T> {
    let Some(node) = self.head else {
      _debug!("cannot pop the front element of an empty deque");
      return Err(DequeError::PopFrontEmpty.into());
    };
    // SAFETY: `node` is live
    let next = unsafe { (*node.as_ptr()).next };
    self.head = next;
    match next {
      Some(next_node) => {
        // SAFETY: `next_node` is live
        unsafe {
          (*next_node.as_ptr()).prev = None;
        }
      }
      None => self.tail = None,
    }
    // SAFETY: `node` was detached from the chain and came from this instance's strategy
    Ok(unsafe { self.release_node(node) })
  }

  /// Appends an element to the back of the deque.
  ///
  /// The instance is left untouched if the memory strategy is unable to supply a node,
  /// in which case `elem` is dropped alongside the error.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::new();
  /// deque.push_back(1).unwrap();
  /// deque.push_back(3).unwrap();
  /// assert_eq!(deque.to_string(), "< 1 3 >");
  /// ```
  #[inline]
  pub fn push_back(&mut self, elem: T) -> crate::Result<()> {
    let node = self.grant_node(elem, None, self.tail, DequeError::PushBackOutOfMemory)?;
    match self.tail {
      Some(tail_node) => {
        // SAFETY: `tail_node` is live
        unsafe {
          (*tail_node.as_ptr()).next = Some(node);
        }
      }
      None => self.head = Some(node),
    }
    self.tail = Some(node);
    Ok(())
  }

  /// Prepends an element to the deque.
  ///
  /// The instance is left untouched if the memory strategy is unable to supply a node,
  /// in which case `elem` is dropped alongside the error.
  ///
  /// ```rust
  /// let mut deque = ldeque::Deque::new();
  /// deque.push_front(1).unwrap();
  /// deque.push_front(3).unwrap();
  /// assert_eq!(deque.to_string(), "< 3 1 >");
  /// ```
  #[inline]
  pub fn push_front(&mut self, elem: T) -> crate::Result<()> {
    let node = self.grant_node(elem, self.head, None, DequeError::PushFrontOutOfMemory)?;
    match self.head {
      Some(head_node) => {
        // SAFETY: `head_node` is live
        unsafe {
          (*head_node.as_ptr()).prev = Some(node);
        }
      }
      None => self.tail = Some(node),
    }
    self.head = Some(node);
    Ok(())
  }

  /// Shared reference to the owned memory strategy.
  #[inline]
  pub fn strategy(&self) -> &M {
    &self.ms
  }

  /// Mutable reference to the owned memory strategy.
  #[inline]
  pub fn strategy_mut(&mut self) -> &mut M {
    &mut self.ms
  }

  fn elements(&self) -> Elements<'_, T> {
    Elements { cur: self.head, phantom: PhantomData }
  }

  fn grant_node(
    &mut self,
    data: T,
    next: Option<NonNull<Node<T>>>,
    prev: Option<NonNull<Node<T>>>,
    error: DequeError,
  ) -> crate::Result<NonNull<Node<T>>> {
    let ptr = match self.ms.alloc(Layout::new::<Node<T>>()) {
      Ok(elem) => elem,
      Err(_err) => {
        _debug!("memory strategy refused a node of {} bytes", size_of::<Node<T>>());
        return Err(error.into());
      }
    };
    let node = ptr.cast::<Node<T>>();
    // SAFETY: the strategy contract guarantees a block that fits `Node<T>`
    unsafe {
      node.as_ptr().write(Node { data, next, prev });
    }
    Ok(node)
  }

  // # Safety
  //
  // `node` must have been granted by this instance's strategy, hold an initialized
  // value and not be referenced by any remaining chain link.
  unsafe fn release_node(&mut self, node: NonNull<Node<T>>) -> T {
    // SAFETY: per the caller contract the node holds an initialized value
    let Node { data, .. } = unsafe { node.as_ptr().read() };
    // SAFETY: per the caller contract the block came from `self.ms`
    unsafe {
      self.ms.dealloc(node.cast(), Layout::new::<Node<T>>());
    }
    data
  }
}

impl<T, M> Deque<T, M>
where
  T: Clone,
  M: MemStrategy,
{
  /// Creates a new instance with the cloneable elements of `slice`.
  #[inline]
  pub fn from_cloneable_slice(slice: &[T]) -> crate::Result<Self>
  where
    M: Default,
  {
    let mut this = Self::with_strategy(M::default());
    for elem in slice {
      this.push_back(elem.clone())?;
    }
    Ok(this)
  }

  /// Deep copy: fresh nodes holding clones of every element, in the same order, managed
  /// by a default strategy instance.
  ///
  /// ```rust
  /// let deque = ldeque::Deque::<u8>::from_iter([1, 2]).unwrap();
  /// let other = deque.try_clone().unwrap();
  /// assert_eq!(deque.to_string(), other.to_string());
  /// ```
  #[inline]
  pub fn try_clone(&self) -> crate::Result<Self>
  where
    M: Default,
  {
    let mut this = Self::with_strategy(M::default());
    this.try_clone_from(self)?;
    Ok(this)
  }

  /// Replaces the contents with a deep copy of `other`, going through this instance's
  /// own strategy node by node.
  ///
  /// If the strategy fails midway, the successfully copied prefix is kept in place and
  /// the error is propagated.
  #[inline]
  pub fn try_clone_from(&mut self, other: &Self) -> crate::Result<()> {
    self.clear();
    for elem in other.elements() {
      self.push_back(elem.clone())?;
    }
    Ok(())
  }
}

impl<T, M> Debug for Deque<T, M>
where
  T: Debug,
  M: MemStrategy,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
    f.debug_list().entries(self.elements()).finish()
  }
}

impl<T, M> Default for Deque<T, M>
where
  M: Default + MemStrategy,
{
  #[inline]
  fn default() -> Self {
    Self::with_strategy(M::default())
  }
}

/// Renders `"< e1 e2 ... en >"`: a single space after `<`, every element followed by a
/// single space. The empty instance renders as `"< >"`.
impl<T, M> Display for Deque<T, M>
where
  T: Display,
  M: MemStrategy,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
    write!(f, "< ")?;
    for elem in self.elements() {
      write!(f, "{elem} ")?;
    }
    write!(f, ">")
  }
}

impl<T, M> Drop for Deque<T, M>
where
  M: MemStrategy,
{
  #[inline]
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T, M> PartialEq for Deque<T, M>
where
  T: PartialEq,
  M: MemStrategy,
{
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.elements().eq(other.elements())
  }
}

impl<T, M> Eq for Deque<T, M>
where
  T: Eq,
  M: MemStrategy,
{
}

// SAFETY: the instance exclusively owns its nodes and its strategy
unsafe impl<T, M> Send for Deque<T, M>
where
  T: Send,
  M: MemStrategy + Send,
{
}

// SAFETY: shared access only hands out shared references to elements
unsafe impl<T, M> Sync for Deque<T, M>
where
  T: Sync,
  M: MemStrategy + Sync,
{
}

struct Elements<'any, T> {
  cur: Option<NonNull<Node<T>>>,
  phantom: PhantomData<&'any Node<T>>,
}

impl<'any, T> Iterator for Elements<'any, T> {
  type Item = &'any T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.cur?;
    // SAFETY: the chain is not mutated while this borrow is alive
    let elem = unsafe { &*node.as_ptr() };
    self.cur = elem.next;
    Some(&elem.data)
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{deque::Deque, mem::MemStrategy};
  use core::{fmt::Formatter, marker::PhantomData};
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
  };

  impl<'de, T, M> Deserialize<'de> for Deque<T, M>
  where
    T: Deserialize<'de>,
    M: Default + MemStrategy,
  {
    #[inline]
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
      DE: Deserializer<'de>,
    {
      struct DequeVisitor<T, M>(PhantomData<(T, M)>);

      impl<'de, T, M> Visitor<'de> for DequeVisitor<T, M>
      where
        T: Deserialize<'de>,
        M: Default + MemStrategy,
      {
        type Value = Deque<T, M>;

        #[inline]
        fn expecting(&self, formatter: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
          formatter.write_str("a sequence of elements")
        }

        #[inline]
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut this = Deque::with_strategy(M::default());
          while let Some(elem) = seq.next_element()? {
            this.push_back(elem).map_err(de::Error::custom)?;
          }
          Ok(this)
        }
      }

      deserializer.deserialize_seq(DequeVisitor::<T, M>(PhantomData))
    }
  }

  impl<T, M> Serialize for Deque<T, M>
  where
    T: Serialize,
    M: MemStrategy,
  {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.collect_seq(self.elements())
    }
  }
}
