use super::{Dfa, DfaTable, StateId};
use crate::IMatcher;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

impl Dfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn finals(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    /// Flattens the automaton into a [DfaTable], assigning indices breadth-first
    /// from the start state so that every reachable state gets exactly one index
    /// and the start state gets index 0.
    pub fn to_dfa_table(&self) -> DfaTable {
        let mut table: Vec<BTreeMap<char, usize>> = vec![BTreeMap::new()];
        let mut indices: HashMap<StateId, usize> = HashMap::from([(self.start, 0)]);
        let mut finals: BTreeSet<usize> = BTreeSet::new();
        if self.states[self.start.0].is_final {
            finals.insert(0);
        }
        let mut unprocessed: VecDeque<StateId> = VecDeque::from([self.start]);
        while let Some(id) = unprocessed.pop_front() {
            let index = indices[&id];
            for (&character, &target) in &self.states[id.0].movements {
                let target_index = match indices.get(&target) {
                    Some(&existing) => existing,
                    None => {
                        table.push(BTreeMap::new());
                        let new_index = table.len() - 1;
                        indices.insert(target, new_index);
                        if self.states[target.0].is_final {
                            finals.insert(new_index);
                        }
                        unprocessed.push_back(target);
                        new_index
                    }
                };
                table[index].insert(character, target_index);
            }
        }
        DfaTable { table, finals }
    }
}

impl IMatcher for Dfa {
    fn match_prefix(&self, string: &str) -> Option<usize> {
        let mut state = self.start;
        if string.is_empty() {
            return if self.states[state.0].is_final {
                Some(0)
            } else {
                None
            };
        }
        let mut last_successful_end = None;
        for (i, character) in string.chars().enumerate() {
            match self.states[state.0].movements.get(&character) {
                Some(&next) => state = next,
                None => break,
            }
            if self.states[state.0].is_final {
                last_successful_end = Some(i + 1);
            }
        }
        last_successful_end
    }
}
