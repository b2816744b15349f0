use std::fmt;

use crate::arena::{NodeArena, NodeId};
use crate::random::{CoinFlip, FairCoin};

use iterator::LevelIterator;
use options::SkipListOptions;

pub mod iterator;
pub mod options;

// guard keys bound every level; reserved, never valid as data
const FRONT_GUARD_KEY: i32 = i32::MIN;
const REAR_GUARD_KEY: i32 = i32::MAX;

/// Ordered set of i32 keys. Level 0 holds every key; each level above it
/// holds a coin-flip-chosen subset of the level below.
pub struct SkipList<C: CoinFlip = FairCoin> {
    arena: NodeArena,
    // one front guard per level; the rear guard is the end of each chain
    front_guards: Vec<NodeId>,
    depth: usize,
    coin: C,
    len: usize,
}

impl SkipList<FairCoin> {
    pub fn new(options: SkipListOptions) -> Self {
        Self::with_coin(options, FairCoin::new())
    }
}

impl<C: CoinFlip> SkipList<C> {
    pub fn with_coin(options: SkipListOptions, coin: C) -> Self {
        // depth below 1 is normalized rather than rejected so the structure
        // is always usable with at least the complete base level
        let depth = options.depth.max(1);
        let mut list = Self {
            arena: NodeArena::new(),
            front_guards: Vec::with_capacity(depth),
            depth,
            coin,
            len: 0,
        };
        list.build_guards();
        list
    }

    fn build_guards(&mut self) {
        let mut rear_guards = Vec::with_capacity(self.depth);
        for _ in 0..self.depth {
            let front = self.arena.alloc(FRONT_GUARD_KEY);
            let rear = self.arena.alloc(REAR_GUARD_KEY);
            self.arena.get_mut(front).next = Some(rear);
            self.arena.get_mut(rear).prev = Some(front);
            self.front_guards.push(front);
            rear_guards.push(rear);
        }
        // tie the guard columns together vertically
        for i in 1..self.depth {
            self.arena.get_mut(self.front_guards[i]).down = Some(self.front_guards[i - 1]);
            self.arena.get_mut(self.front_guards[i - 1]).up = Some(self.front_guards[i]);
            self.arena.get_mut(rear_guards[i]).down = Some(rear_guards[i - 1]);
            self.arena.get_mut(rear_guards[i - 1]).up = Some(rear_guards[i]);
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a key. Returns false for a duplicate or a reserved guard key,
    /// leaving the structure untouched.
    pub fn insert(&mut self, key: i32) -> bool {
        if key == FRONT_GUARD_KEY || key == REAR_GUARD_KEY {
            return false;
        }
        // walk level 0 to the first node whose key is not below the new one
        let mut reached = self.next_of(self.front_guards[0]);
        while self.arena.get(reached).key < key {
            reached = self.next_of(reached);
        }
        if self.arena.get(reached).key == key {
            return false;
        }
        let mut node = self.arena.alloc(key);
        self.link_before(node, reached);
        self.len += 1;

        // promote while the coin allows and a level above exists
        let mut level = 1;
        while self.coin.flip() && level < self.depth {
            let upper = self.arena.alloc(key);
            self.arena.get_mut(node).up = Some(upper);
            self.arena.get_mut(upper).down = Some(node);

            // back toward the front guard until some node reaches the level
            // above; the guard column guarantees one exists
            let mut scan = self.prev_of(node);
            while self.arena.get(scan).up.is_none() {
                scan = self.prev_of(scan);
            }
            let mut pos = self
                .arena
                .get(scan)
                .up
                .expect("scan stopped at an up link");
            while self.arena.get(pos).key < key {
                pos = self.next_of(pos);
            }
            self.link_before(upper, pos);
            node = upper;
            level += 1;
        }
        true
    }

    /// Membership test. Guard keys always answer false.
    pub fn contains(&self, key: i32) -> bool {
        if key == FRONT_GUARD_KEY || key == REAR_GUARD_KEY {
            return false;
        }
        // top level first: sparser levels cover more keys per step, though
        // level 0 alone would be enough
        (0..self.depth)
            .rev()
            .any(|level| self.level_keys(level).any(|k| k == key))
    }

    /// Drops a key from every level it occupies. Returns false without
    /// mutating if the key is absent.
    pub fn remove(&mut self, key: i32) -> bool {
        if !self.contains(key) {
            return false;
        }
        let mut current = self.front_guards[self.depth - 1];
        loop {
            let next = self.next_of(current);
            let next_key = self.arena.get(next).key;
            if next_key < key {
                current = next;
            } else if next_key == key {
                self.unlink_column(next);
                return true;
            } else {
                // no occurrence at this level, retry one level down
                match self.arena.get(current).down {
                    Some(down) => current = down,
                    None => return false,
                }
            }
        }
    }

    /// Per-level key sequences from the top level down to level 0, guards
    /// included at both ends.
    pub fn render(&self) -> Vec<Vec<i32>> {
        (0..self.depth)
            .rev()
            .map(|level| self.level_keys(level).collect())
            .collect()
    }

    pub fn level_keys(&self, level: usize) -> LevelIterator<'_> {
        LevelIterator::new(&self.arena, self.front_guards[level])
    }

    /// Resets to the freshly-constructed empty state, releasing every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front_guards.clear();
        self.len = 0;
        self.build_guards();
    }

    // splice node in immediately before next, rewiring the four
    // neighboring links
    fn link_before(&mut self, node: NodeId, next: NodeId) {
        debug_assert!(self.arena.get(node).key < self.arena.get(next).key);
        let prev = self
            .arena
            .get(next)
            .prev
            .expect("insert position has a predecessor");
        self.arena.get_mut(node).prev = Some(prev);
        self.arena.get_mut(prev).next = Some(node);
        self.arena.get_mut(node).next = Some(next);
        self.arena.get_mut(next).prev = Some(node);
    }

    // unlink the matched occurrence at every level down to level 0; the
    // key may occupy fewer levels than the walk started from
    fn unlink_column(&mut self, top: NodeId) {
        let mut target = Some(top);
        while let Some(id) = target {
            let prev = self
                .arena
                .get(id)
                .prev
                .expect("linked node has a predecessor");
            let next = self
                .arena
                .get(id)
                .next
                .expect("linked node has a successor");
            let down = self.arena.get(id).down;
            self.arena.get_mut(prev).next = Some(next);
            self.arena.get_mut(next).prev = Some(prev);
            self.arena.free(id);
            target = down;
        }
        self.len -= 1;
    }

    fn next_of(&self, id: NodeId) -> NodeId {
        self.arena
            .get(id)
            .next
            .expect("walk stays left of the rear guard")
    }

    fn prev_of(&self, id: NodeId) -> NodeId {
        self.arena
            .get(id)
            .prev
            .expect("walk stays right of the front guard")
    }
}

impl<C: CoinFlip> fmt::Display for SkipList<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.depth).rev() {
            write!(f, "Level: {} -- ", level)?;
            for key in self.level_keys(level) {
                write!(f, "{}, ", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
