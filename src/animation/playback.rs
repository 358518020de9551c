//! Live playback of animation trees against a mutable target.
//!
//! Offline frame generation goes through [`crate::timeline::Timeline`]; this module drives
//! the same trees incrementally with an explicit clock, firing lifecycle events.

use std::collections::{BTreeMap, BTreeSet};

use crate::animation::unit::{AnimTree, AnimUnit, PropertyTarget};
use crate::animation::value::AnimValue;
use crate::foundation::error::{PenlineError, PenlineResult};
use crate::timeline::keys::PropKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackEvent {
    Started,
    Progress { progress: f64 },
    Completed,
}

#[derive(Debug)]
struct Node {
    state: PlaybackState,
    started_at: f64,
    kind: NodeKind,
}

#[derive(Debug)]
enum NodeKind {
    Leaf {
        unit: AnimUnit,
        starts: BTreeMap<PropKey, AnimValue>,
    },
    Sequence(Box<Node>, Box<Node>),
    Parallel(Box<Node>, Box<Node>),
}

impl Node {
    fn build(tree: AnimTree) -> Self {
        let kind = match tree {
            AnimTree::Leaf(unit) => NodeKind::Leaf {
                unit,
                starts: BTreeMap::new(),
            },
            AnimTree::Sequence(a, b) => {
                NodeKind::Sequence(Box::new(Self::build(*a)), Box::new(Self::build(*b)))
            }
            AnimTree::Parallel(a, b) => {
                NodeKind::Parallel(Box::new(Self::build(*a)), Box::new(Self::build(*b)))
            }
        };
        Self {
            state: PlaybackState::Idle,
            started_at: 0.0,
            kind,
        }
    }

    fn duration(&self) -> f64 {
        match &self.kind {
            NodeKind::Leaf { unit, .. } => unit.duration(),
            NodeKind::Sequence(a, b) => a.duration() + b.duration(),
            NodeKind::Parallel(a, b) => a.duration().max(b.duration()),
        }
    }

    fn start(
        &mut self,
        target: &dyn PropertyTarget,
        at: f64,
        cancelled: &BTreeSet<PropKey>,
    ) -> PenlineResult<()> {
        self.state = PlaybackState::Running;
        self.started_at = at;
        match &mut self.kind {
            NodeKind::Leaf { unit, starts } => {
                *starts = unit.initialize(target)?;
                starts.retain(|k, _| !cancelled.contains(k));
            }
            NodeKind::Sequence(a, _) => a.start(target, at, cancelled)?,
            NodeKind::Parallel(a, b) => {
                a.start(target, at, cancelled)?;
                b.start(target, at, cancelled)?;
            }
        }
        Ok(())
    }

    /// Advance to absolute time `now`; returns whether this node has completed.
    fn advance(
        &mut self,
        target: &mut dyn PropertyTarget,
        now: f64,
        cancelled: &BTreeSet<PropKey>,
    ) -> PenlineResult<bool> {
        match self.state {
            PlaybackState::Idle => return Ok(false),
            PlaybackState::Complete => return Ok(true),
            PlaybackState::Running => {}
        }

        let started_at = self.started_at;
        let done = match &mut self.kind {
            NodeKind::Leaf { unit, starts } => {
                let raw = unit.progress(now - started_at);
                unit.apply(starts, raw, target);
                raw >= 1.0
            }
            NodeKind::Sequence(a, b) => {
                let first_done = a.advance(target, now, cancelled)?;
                if first_done && b.state == PlaybackState::Idle {
                    // The second half starts from the values the first half left behind.
                    b.start(target, a.started_at + a.duration(), cancelled)?;
                }
                first_done && b.advance(target, now, cancelled)?
            }
            NodeKind::Parallel(a, b) => {
                let a_done = a.advance(target, now, cancelled)?;
                let b_done = b.advance(target, now, cancelled)?;
                a_done && b_done
            }
        };
        if done {
            self.state = PlaybackState::Complete;
        }
        Ok(done)
    }

    fn forget_property(&mut self, key: &PropKey) {
        match &mut self.kind {
            NodeKind::Leaf { starts, .. } => {
                starts.remove(key);
            }
            NodeKind::Sequence(a, b) | NodeKind::Parallel(a, b) => {
                a.forget_property(key);
                b.forget_property(key);
            }
        }
    }
}

/// One animation tree being played against a target.
///
/// `Idle -> Running` on [`Playback::start`]; `Running -> Complete` once every leaf has
/// reached full progress or on [`Playback::stop`]. [`Playback::cancel`] returns to `Idle`
/// without a completion event.
#[derive(Debug)]
pub struct Playback {
    root: Node,
    properties: BTreeSet<PropKey>,
    cancelled: BTreeSet<PropKey>,
    state: PlaybackState,
}

impl Playback {
    pub fn new(tree: impl Into<AnimTree>) -> Self {
        let tree = tree.into();
        let properties = tree.animated_properties();
        Self {
            root: Node::build(tree),
            properties,
            cancelled: BTreeSet::new(),
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn duration(&self) -> f64 {
        self.root.duration()
    }

    /// Snapshot start values and begin running at elapsed time zero.
    pub fn start(&mut self, target: &dyn PropertyTarget) -> PenlineResult<PlaybackEvent> {
        if self.state == PlaybackState::Running {
            return Err(PenlineError::animation("playback is already running"));
        }
        self.root = Node::build(self.tree_snapshot());
        self.root.start(target, 0.0, &self.cancelled)?;
        self.state = PlaybackState::Running;
        Ok(PlaybackEvent::Started)
    }

    /// Apply the tree's values at `elapsed` seconds since start.
    pub fn advance(
        &mut self,
        target: &mut dyn PropertyTarget,
        elapsed: f64,
    ) -> PenlineResult<Vec<PlaybackEvent>> {
        if self.state != PlaybackState::Running {
            return Ok(Vec::new());
        }
        let done = self.root.advance(target, elapsed, &self.cancelled)?;
        let duration = self.duration();
        let progress = if duration <= 0.0 {
            1.0
        } else {
            (elapsed / duration).clamp(0.0, 1.0)
        };

        let mut events = vec![PlaybackEvent::Progress { progress }];
        if done {
            self.state = PlaybackState::Complete;
            events.push(PlaybackEvent::Completed);
        }
        Ok(events)
    }

    /// Stop where it is and report completion.
    pub fn stop(&mut self) -> Option<PlaybackEvent> {
        if self.state != PlaybackState::Running {
            return None;
        }
        self.state = PlaybackState::Complete;
        Some(PlaybackEvent::Completed)
    }

    /// Stop without reporting completion.
    pub fn cancel(&mut self) {
        self.state = PlaybackState::Idle;
    }

    /// Stop animating one property. Cancels the playback when nothing else is left.
    pub fn cancel_property(&mut self, key: &PropKey) {
        if !self.properties.contains(key) {
            return;
        }
        self.cancelled.insert(key.clone());
        self.root.forget_property(key);
        if self.properties.iter().all(|k| self.cancelled.contains(k)) {
            self.cancel();
        }
    }

    pub fn animates(&self, key: &PropKey) -> bool {
        self.properties.contains(key) && !self.cancelled.contains(key)
    }

    fn tree_snapshot(&self) -> AnimTree {
        fn rebuild(node: &Node) -> AnimTree {
            match &node.kind {
                NodeKind::Leaf { unit, .. } => AnimTree::Leaf(unit.clone()),
                NodeKind::Sequence(a, b) => AnimTree::sequence(rebuild(a), rebuild(b)),
                NodeKind::Parallel(a, b) => AnimTree::parallel(rebuild(a), rebuild(b)),
            }
        }
        rebuild(&self.root)
    }
}

/// Identifier of a playback inside a [`PlaybackSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaybackId(u64);

/// Playbacks sharing one target, each started at its own clock time.
#[derive(Debug, Default)]
pub struct PlaybackSet {
    next_id: u64,
    entries: Vec<(PlaybackId, f64, Playback)>,
}

impl PlaybackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tree` on `target` at clock time `now` and keep it in the set.
    pub fn insert(
        &mut self,
        target: &dyn PropertyTarget,
        tree: impl Into<AnimTree>,
        now: f64,
    ) -> PenlineResult<PlaybackId> {
        let mut playback = Playback::new(tree);
        playback.start(target)?;
        let id = PlaybackId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, now, playback));
        Ok(id)
    }

    pub fn get(&self, id: PlaybackId) -> Option<&Playback> {
        self.entries
            .iter()
            .find(|(eid, _, _)| *eid == id)
            .map(|(_, _, p)| p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance every running playback to clock time `now`.
    pub fn advance_all(
        &mut self,
        target: &mut dyn PropertyTarget,
        now: f64,
    ) -> PenlineResult<Vec<(PlaybackId, PlaybackEvent)>> {
        let mut out = Vec::new();
        for (id, started, playback) in &mut self.entries {
            for ev in playback.advance(target, now - *started)? {
                out.push((*id, ev));
            }
        }
        Ok(out)
    }

    pub fn cancel_all(&mut self) {
        for (_, _, playback) in &mut self.entries {
            playback.cancel();
        }
    }

    pub fn cancel_property(&mut self, key: &PropKey) {
        for (_, _, playback) in &mut self.entries {
            playback.cancel_property(key);
        }
    }

    /// Drop playbacks that are no longer running.
    pub fn prune(&mut self) {
        self.entries
            .retain(|(_, _, p)| p.state() == PlaybackState::Running);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
