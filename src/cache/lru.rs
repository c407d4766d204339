//! Recency List Module
//!
//! Doubly-linked list ordered by recency of use, backing the LRU store.
//!
//! Nodes live in a slab (`Vec<Option<Node>>`) and link to each other by
//! index, so a node's position handle stays valid until that node is
//! removed. Freed slots are recycled through a free list.

// == Node ==
#[derive(Debug)]
struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks items in order of use.
///
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Every operation addressed by handle is O(1).
#[derive(Debug)]
pub struct RecencyList<T> {
    nodes: Vec<Option<Node<T>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructors ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an item as the most recently used and returns its handle.
    pub fn push_front(&mut self, item: T) -> usize {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            item,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the item at `idx` as most recently used.
    ///
    /// Returns false if `idx` is not a live handle.
    pub fn move_to_front(&mut self, idx: usize) -> bool {
        if !self.is_live(idx) {
            return false;
        }
        if self.head == Some(idx) {
            return true;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        true
    }

    // == Remove ==
    /// Detaches the item at `idx` and returns it.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }

        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        self.len -= 1;
        Some(node.item)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used item.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail_idx = self.tail?;
        self.remove(tail_idx)
    }

    // == Peek ==
    /// Returns the least recently used item without moving it.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.get(idx))
    }

    /// Returns the most recently used item without moving it.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.get(idx))
    }

    /// Returns the item at `idx`.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.nodes
            .get(idx)
            .and_then(Option::as_ref)
            .map(|node| &node.item)
    }

    /// Returns the item at `idx` mutably. Does not change its position.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.nodes
            .get_mut(idx)
            .and_then(Option::as_mut)
            .map(|node| &mut node.item)
    }

    // == Length ==
    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every item and releases all handles.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iter ==
    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.nodes.get(idx), Some(Some(_)))
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.nodes.get(idx)?.as_ref()?;
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(items(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(list.back(), Some(&"key1"));
        assert_eq!(list.front(), Some(&"key3"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert!(list.move_to_front(a));

        assert_eq!(items(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back(), Some(&"b"));
    }

    #[test]
    fn test_move_to_front_head_is_noop() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");

        assert!(list.move_to_front(b));
        assert_eq!(items(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_move_to_front_middle() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        list.move_to_front(b);

        assert_eq!(items(&list), vec!["b", "c", "a"]);
        assert_eq!(list.back(), Some(&"a"));
    }

    #[test]
    fn test_move_to_front_dead_handle() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.remove(a);

        assert!(!list.move_to_front(a));
        assert!(!list.move_to_front(42));
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_back() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.pop_back(), Some("key1"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_back(), Some("key2"));
        assert_eq!(list.pop_back(), Some("key3"));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_remove_middle_head_and_tail() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");
        let d = list.push_front("d");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(items(&list), vec!["d", "c", "a"]);

        assert_eq!(list.remove(d), Some("d"));
        assert_eq!(items(&list), vec!["c", "a"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(items(&list), vec!["c"]);
        assert_eq!(list.back(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());

        // Removing twice is harmless
        assert_eq!(list.remove(c), None);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.remove(a);

        let c = list.push_front("c");
        assert_eq!(c, a);
        assert_eq!(list.get(c), Some(&"c"));
        assert_eq!(items(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut_keeps_position() {
        let mut list = RecencyList::new();

        let a = list.push_front(1);
        list.push_front(2);

        if let Some(item) = list.get_mut(a) {
            *item = 10;
        }

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 10]);
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.get(a), None);
        assert_eq!(list.iter().count(), 0);

        list.push_front("c");
        assert_eq!(items(&list), vec!["c"]);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        // touch(a): [a, c, b]
        // touch(c): [c, a, b]
        // touch(b): [b, c, a]
        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
    }

    #[test]
    fn test_iter_size_hint() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);

        let iter = list.iter();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }
}
