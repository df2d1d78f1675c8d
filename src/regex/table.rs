use super::DfaTable;
use crate::IMatcher;
use std::collections::BTreeSet;

impl DfaTable {
    /// Number of table rows; one per reachable DFA state.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn final_indices(&self) -> &BTreeSet<usize> {
        &self.finals
    }

    pub fn is_final(&self, index: usize) -> bool {
        self.finals.contains(&index)
    }
}

impl IMatcher for DfaTable {
    fn match_prefix(&self, string: &str) -> Option<usize> {
        let mut state = 0;
        if string.is_empty() {
            return if self.finals.contains(&state) {
                Some(0)
            } else {
                None
            };
        }
        let mut last_successful_end = None;
        for (i, character) in string.chars().enumerate() {
            match self.table[state].get(&character) {
                Some(&next) => state = next,
                None => break,
            }
            if self.finals.contains(&state) {
                last_successful_end = Some(i + 1);
            }
        }
        last_successful_end
    }
}
