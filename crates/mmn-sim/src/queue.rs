//! `CustomerQueue` — the single shared FIFO line in front of the servers.

use std::collections::VecDeque;

use crate::Customer;

/// Arrivals push at the tail, servers pop from the head.  No reordering, no
/// preemption: a customer is in here iff it has arrived and no server has
/// dequeued it yet.
#[derive(Debug, Default, Clone)]
pub struct CustomerQueue {
    inner: VecDeque<Customer>,
}

impl CustomerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, customer: Customer) {
        debug_assert!(customer.is_waiting());
        self.inner.push_back(customer);
    }

    pub fn pop_front(&mut self) -> Option<Customer> {
        self.inner.pop_front()
    }

    /// The customer that will be dispatched next.
    pub fn front(&self) -> Option<&Customer> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
