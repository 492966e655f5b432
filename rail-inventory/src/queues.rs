use rail_core::{SeatPreference, TicketId};
use std::collections::VecDeque;

use crate::segments::SegmentKey;

/// A pending ticket waiting for a better tier.
///
/// Carries the journey segments and preference so a promotion can allocate a
/// seat without going back to the ticket store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub ticket_id: TicketId,
    pub segments: Vec<SegmentKey>,
    pub preference: SeatPreference,
}

impl QueueEntry {
    pub fn new(ticket_id: TicketId, segments: Vec<SegmentKey>, preference: SeatPreference) -> Self {
        Self { ticket_id, segments, preference }
    }
}

/// RAC and waiting-list queues for one train on one day. Strict FIFO.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierQueues {
    rac: VecDeque<QueueEntry>,
    waiting: VecDeque<QueueEntry>,
}

impl TierQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rac_len(&self) -> usize {
        self.rac.len()
    }

    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Append to the RAC tail, returning the 1-indexed position taken
    pub fn push_rac(&mut self, entry: QueueEntry) -> u32 {
        self.rac.push_back(entry);
        self.rac.len() as u32
    }

    /// Append to the waiting-list tail, returning the 1-indexed position taken
    pub fn push_waiting(&mut self, entry: QueueEntry) -> u32 {
        self.waiting.push_back(entry);
        self.waiting.len() as u32
    }

    pub fn peek_rac(&self) -> Option<&QueueEntry> {
        self.rac.front()
    }

    pub fn pop_waiting(&mut self) -> Option<QueueEntry> {
        self.waiting.pop_front()
    }

    pub fn remove_rac(&mut self, ticket: TicketId) -> Option<QueueEntry> {
        let index = self.rac.iter().position(|e| e.ticket_id == ticket)?;
        self.rac.remove(index)
    }

    pub fn remove_waiting(&mut self, ticket: TicketId) -> Option<QueueEntry> {
        let index = self.waiting.iter().position(|e| e.ticket_id == ticket)?;
        self.waiting.remove(index)
    }

    /// RAC entries with their current 1-indexed positions
    pub fn rac(&self) -> impl Iterator<Item = (u32, &QueueEntry)> {
        self.rac.iter().enumerate().map(|(i, e)| (i as u32 + 1, e))
    }

    /// Waiting-list entries with their current 1-indexed positions
    pub fn waiting(&self) -> impl Iterator<Item = (u32, &QueueEntry)> {
        self.waiting.iter().enumerate().map(|(i, e)| (i as u32 + 1, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> QueueEntry {
        QueueEntry::new(TicketId::new(), Vec::new(), SeatPreference::NoPreference)
    }

    #[test]
    fn test_fifo_positions() {
        let mut queues = TierQueues::new();
        let a = entry();
        let b = entry();
        let c = entry();

        assert_eq!(queues.push_rac(a.clone()), 1);
        assert_eq!(queues.push_rac(b.clone()), 2);
        assert_eq!(queues.push_waiting(c.clone()), 1);

        assert_eq!(queues.peek_rac(), Some(&a));
        assert_eq!(queues.remove_rac(a.ticket_id), Some(a));
        assert_eq!(queues.peek_rac(), Some(&b));
        assert_eq!(queues.rac().next().map(|(p, _)| p), Some(1));
        assert_eq!(queues.pop_waiting(), Some(c));
        assert_eq!(queues.pop_waiting(), None);
    }

    #[test]
    fn test_remove_from_middle_keeps_order() {
        let mut queues = TierQueues::new();
        let entries: Vec<QueueEntry> = (0..3).map(|_| entry()).collect();
        for e in &entries {
            queues.push_waiting(e.clone());
        }

        assert!(queues.remove_waiting(entries[1].ticket_id).is_some());
        assert!(queues.remove_waiting(entries[1].ticket_id).is_none());

        let order: Vec<(u32, TicketId)> = queues.waiting().map(|(p, e)| (p, e.ticket_id)).collect();
        assert_eq!(order, vec![(1, entries[0].ticket_id), (2, entries[2].ticket_id)]);
    }
}
