use serde::{Deserialize, Serialize};

use super::AdvisorTip;

/// Most tips kept waiting in a session queue.
pub const MAX_QUEUE: usize = 10;

/// Per-project record of how the user responded to tips.
///
/// Ids are only ever appended, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorState {
    seen_tips: Vec<String>,
    dismissed_tips: Vec<String>,
    applied_tips: Vec<String>,
}

fn record(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|seen| seen == id) {
        ids.push(id.to_string());
    }
}

impl AdvisorState {
    #[inline] pub fn seen_tips(&self) -> &[String] { &self.seen_tips }
    #[inline] pub fn dismissed_tips(&self) -> &[String] { &self.dismissed_tips }
    #[inline] pub fn applied_tips(&self) -> &[String] { &self.applied_tips }

    #[inline] pub fn has_seen(&self, id: &str) -> bool { self.seen_tips.iter().any(|t| t == id) }
    #[inline] pub fn is_dismissed(&self, id: &str) -> bool { self.dismissed_tips.iter().any(|t| t == id) }
    #[inline] pub fn is_applied(&self, id: &str) -> bool { self.applied_tips.iter().any(|t| t == id) }

    pub fn mark_seen(&mut self, id: &str) { record(&mut self.seen_tips, id) }

    /// Dismissed tips are also seen.
    pub fn dismiss(&mut self, id: &str) {
        record(&mut self.dismissed_tips, id);
        record(&mut self.seen_tips, id);
    }

    /// Applied tips are also seen.
    pub fn apply(&mut self, id: &str) {
        record(&mut self.applied_tips, id);
        record(&mut self.seen_tips, id);
    }
}

/// Tips waiting to be shown in the current session, highest priority first.
/// The head of the queue is the active tip.
#[derive(Debug, Clone, Default)]
pub struct AdvisorQueue<'c> {
    tips: Vec<&'c AdvisorTip>,
}

impl<'c> AdvisorQueue<'c> {
    pub fn new() -> Self { Self { tips: Vec::new() } }

    #[inline] pub fn active(&self) -> Option<&'c AdvisorTip> { self.tips.first().copied() }
    #[inline] pub fn tips(&self) -> &[&'c AdvisorTip] { &self.tips }
    #[inline] pub fn len(&self) -> usize { self.tips.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.tips.is_empty() }

    /// Add matched tips, skipping dismissed and already queued ones, then keep
    /// the `MAX_QUEUE` highest-priority entries.
    pub fn enqueue(&mut self, tips: impl IntoIterator<Item = &'c AdvisorTip>, state: &AdvisorState) {
        let before = self.tips.len();
        for tip in tips {
            if !state.is_dismissed(tip.id) && !self.tips.iter().any(|queued| queued.id == tip.id) {
                self.tips.push(tip);
            }
        }
        if self.tips.len() == before { return }

        self.tips.sort_by(|a, b| b.priority.cmp(&a.priority));
        self.tips.truncate(MAX_QUEUE);
    }

    /// Drop the active tip and never show it again.
    pub fn dismiss(&mut self, state: &mut AdvisorState) -> Option<&'c AdvisorTip> {
        let tip = self.pop()?;
        state.dismiss(tip.id);
        Some(tip)
    }

    /// Accept the active tip.
    pub fn apply(&mut self, state: &mut AdvisorState) -> Option<&'c AdvisorTip> {
        let tip = self.pop()?;
        state.apply(tip.id);
        Some(tip)
    }

    /// Move past the active tip without dismissing it.
    pub fn next(&mut self, state: &mut AdvisorState) -> Option<&'c AdvisorTip> {
        let tip = self.pop()?;
        state.mark_seen(tip.id);
        Some(tip)
    }

    /// Empty the queue.  The advisor state is untouched.
    pub fn reset(&mut self) { self.tips.clear() }

    fn pop(&mut self) -> Option<&'c AdvisorTip> {
        (!self.tips.is_empty()).then(|| self.tips.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::Trigger;

    fn tips(n: u8) -> Vec<AdvisorTip> {
        let ids = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"];
        (0..n).map(|i| AdvisorTip::new(ids[usize::from(i)], Trigger::DesignReview, 10 + i, "", "", "")).collect()
    }

    #[test]
    fn state_records_once() {
        let mut state = AdvisorState::default();
        state.dismiss("x");
        state.dismiss("x");
        state.apply("y");
        assert_eq!(state.dismissed_tips(), ["x"]);
        assert_eq!(state.seen_tips(), ["x", "y"]);
        assert!(state.is_applied("y") && state.has_seen("y") && !state.is_dismissed("y"));
    }

    #[test]
    fn state_json_round_trip() {
        let mut state = AdvisorState::default();
        state.dismiss("water-tank-placed");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["dismissed_tips"][0], "water-tank-placed");
        assert_eq!(serde_json::from_value::<AdvisorState>(json).unwrap(), state);
        assert_eq!(serde_json::from_str::<AdvisorState>("{}").unwrap(), AdvisorState::default());
    }

    #[test]
    fn queue_orders_and_caps() {
        let catalog = tips(12);
        let mut queue = AdvisorQueue::new();
        queue.enqueue(&catalog, &AdvisorState::default());

        assert_eq!(queue.len(), MAX_QUEUE);
        assert_eq!(queue.active().map(|t| t.id), Some("l"));
        assert!(queue.tips().windows(2).all(|w| w[0].priority >= w[1].priority));
    }

    #[test]
    fn queue_skips_dismissed_and_duplicates() {
        let catalog = tips(3);
        let mut state = AdvisorState::default();
        state.dismiss("c");

        let mut queue = AdvisorQueue::new();
        queue.enqueue(&catalog, &state);
        queue.enqueue(&catalog, &state);
        assert_eq!(queue.tips().iter().map(|t| t.id).collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn queue_actions_update_state() {
        let catalog = tips(3);
        let mut state = AdvisorState::default();
        let mut queue = AdvisorQueue::new();
        queue.enqueue(&catalog, &state);

        assert_eq!(queue.dismiss(&mut state).map(|t| t.id), Some("c"));
        assert_eq!(queue.apply(&mut state).map(|t| t.id), Some("b"));
        assert_eq!(queue.next(&mut state).map(|t| t.id), Some("a"));
        assert!(queue.next(&mut state).is_none());

        assert_eq!(state.dismissed_tips(), ["c"]);
        assert_eq!(state.applied_tips(), ["b"]);
        assert_eq!(state.seen_tips(), ["c", "b", "a"]);

        queue.enqueue(&catalog, &state);
        assert_eq!(queue.len(), 2);
        queue.reset();
        assert!(queue.is_empty());
        assert!(state.is_dismissed("c"));
    }
}
