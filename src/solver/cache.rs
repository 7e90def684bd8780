use std::collections::HashMap;

/// The proven result for a position, from the perspective of whichever side
/// is to move there. The filled cells of a position determine whose turn it
/// is, so storing the verdict mover-relative is unambiguous per key.
///
/// A draw never counts as a win, so `NoMoverWin` covers both "the mover
/// loses" and "the game ends level".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MoverWin,
    NoMoverWin,
}

/// Memo table from position key to proven outcome. Positions are immutable
/// facts once proven: entries are written once, never evicted, and live for
/// the whole process.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, Outcome>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: u64) -> Option<Outcome> {
        self.entries.get(&key).copied()
    }

    pub fn put(&mut self, key: u64, outcome: Outcome) {
        self.entries.insert(key, outcome);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key() {
        let table = TranspositionTable::new();
        assert_eq!(table.get(42), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let mut table = TranspositionTable::new();
        table.put(42, Outcome::MoverWin);
        table.put(43, Outcome::NoMoverWin);

        assert_eq!(table.get(42), Some(Outcome::MoverWin));
        assert_eq!(table.get(43), Some(Outcome::NoMoverWin));
        assert_eq!(table.len(), 2);
    }
}
