//! Recency List Module
//!
//! Doubly-linked list of keys stored in a slot arena. Nodes are addressed by
//! [`NodeId`] handles instead of pointers; freed slots are recycled.
//!
//! Order runs from head (least recently used) to tail (most recently used).

// == Node Handle ==
/// Handle to a node in a [`RecencyList`].
///
/// Only valid until the node is unlinked; the slot may then be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    key: Vec<u8>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == Recency List ==
#[derive(Debug, Default)]
pub struct RecencyList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // == Append ==
    /// Attaches a new node at the tail and returns its handle.
    pub fn append(&mut self, key: Vec<u8>) -> NodeId {
        let node = Node {
            key,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };
        self.attach_back(id);
        self.len += 1;
        id
    }

    // == Unlink ==
    /// Splices a node out of the list, frees its slot and returns its key.
    pub fn unlink(&mut self, id: NodeId) -> Option<Vec<u8>> {
        self.detach(id)?;
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.key)
    }

    // == Touch ==
    /// Moves a node to the tail (most recently used).
    ///
    /// Equivalent to unlink followed by append, but keeps the node's slot
    /// and handle.
    pub fn touch(&mut self, id: NodeId) {
        if self.tail == Some(id) {
            return;
        }
        if self.detach(id).is_some() {
            self.attach_back(id);
        }
    }

    // == Pop Front ==
    /// Unlinks the least recently used node and returns its key.
    pub fn pop_front(&mut self) -> Option<Vec<u8>> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Key of the least recently used node.
    pub fn front(&self) -> Option<&[u8]> {
        self.head
            .and_then(|id| self.node(id))
            .map(|node| node.key.as_slice())
    }

    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.node(cursor?)?;
            cursor = node.next;
            Some(node.key.as_slice())
        })
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Fixes neighbour links (and head/tail) around a node, leaving the node
    /// allocated but unlinked.
    fn detach(&mut self, id: NodeId) -> Option<()> {
        let node = self.node_mut(id)?;
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev {
            Some(p) => {
                if let Some(prev_node) = self.node_mut(p) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(next_node) = self.node_mut(n) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        Some(())
    }

    fn attach_back(&mut self, id: NodeId) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(t) => {
                if let Some(tail_node) = self.node_mut(t) {
                    tail_node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }
}
