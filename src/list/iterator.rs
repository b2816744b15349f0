use crate::arena::{NodeArena, NodeId};

/// Walks one level front guard to rear guard, yielding every key on the
/// way, guards included.
pub struct LevelIterator<'a> {
    arena: &'a NodeArena,
    current: Option<NodeId>,
}

impl<'a> LevelIterator<'a> {
    pub(crate) fn new(arena: &'a NodeArena, front_guard: NodeId) -> Self {
        Self {
            arena,
            current: Some(front_guard),
        }
    }
}

impl Iterator for LevelIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let id = self.current?;
        let node = self.arena.get(id);
        self.current = node.next;
        Some(node.key)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{options::SkipListOptions, SkipList};
    use crate::random::test_coin::ScriptedCoin;

    #[test]
    fn test_level_keys_empty_list() {
        let list = SkipList::new(SkipListOptions::new_with_defaults());
        let keys: Vec<i32> = list.level_keys(0).collect();
        assert_eq!(keys, vec![i32::MIN, i32::MAX]);
    }

    #[test]
    fn test_level_keys_sorted_with_guards() {
        let coin = ScriptedCoin::new(vec![]);
        let mut list = SkipList::with_coin(SkipListOptions { depth: 2 }, coin);
        for key in [20, 10, 15] {
            assert!(list.insert(key));
        }
        let keys: Vec<i32> = list.level_keys(0).collect();
        assert_eq!(keys, vec![i32::MIN, 10, 15, 20, i32::MAX]);
        // nothing promoted, level 1 holds only the guards
        let keys: Vec<i32> = list.level_keys(1).collect();
        assert_eq!(keys, vec![i32::MIN, i32::MAX]);
    }
}
