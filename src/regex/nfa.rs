use super::{ClassItem, Dfa, DfaState, Nfa, NfaState, Regex, StateId};
use crate::IMatcher;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

fn flatten_items(items: &BTreeSet<ClassItem>) -> BTreeSet<char> {
    let mut characters = BTreeSet::new();
    for item in items {
        match item {
            ClassItem::Character(character) => {
                characters.insert(*character);
            }
            ClassItem::Range(start, end, alphabet) => {
                for character in *start..=*end {
                    if alphabet.contains(character) {
                        characters.insert(character);
                    }
                }
            }
        }
    }
    characters
}

impl Regex {
    /// Thompson construction: one arena-allocated fragment per sub-expression,
    /// each with exactly one start and one final state.
    pub fn to_nfa(&self) -> Nfa {
        let mut nfa = Nfa {
            states: Vec::new(),
            start: StateId(0),
            finish: StateId(0),
        };
        let (start, finish) = nfa.insert(self);
        nfa.start = start;
        nfa.finish = finish;
        nfa
    }
}

impl Nfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn finish(&self) -> StateId {
        self.finish
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn add_state(&mut self, is_final: bool) -> StateId {
        self.states.push(NfaState {
            movements: BTreeMap::new(),
            epsilon_moves: Vec::new(),
            is_final,
        });
        StateId(self.states.len() - 1)
    }

    fn insert(&mut self, regex: &Regex) -> (StateId, StateId) {
        match regex {
            Regex::Epsilon => {
                let finish = self.add_state(true);
                let start = self.add_state(false);
                self.states[start.0].epsilon_moves.push(finish);
                (start, finish)
            }
            Regex::Character(character) => {
                let finish = self.add_state(true);
                let start = self.add_state(false);
                self.states[start.0].movements.insert(*character, finish);
                (start, finish)
            }
            Regex::Any(alphabet) => {
                let characters: Vec<char> = alphabet.iter().collect();
                self.insert_edges(characters)
            }
            Regex::Either(items) => self.insert_edges(flatten_items(items)),
            Regex::Neither(items, alphabet) => {
                let excluded = flatten_items(items);
                let characters: Vec<char> = alphabet
                    .iter()
                    .filter(|character| !excluded.contains(character))
                    .collect();
                self.insert_edges(characters)
            }
            Regex::Concatenation(left, right) => {
                let (left_start, left_finish) = self.insert(left);
                let (right_start, right_finish) = self.insert(right);
                self.states[left_finish.0].epsilon_moves.push(right_start);
                self.states[left_finish.0].is_final = false;
                (left_start, right_finish)
            }
            Regex::Union(left, right) => {
                let (left_start, left_finish) = self.insert(left);
                let (right_start, right_finish) = self.insert(right);
                let finish = self.add_state(true);
                let start = self.add_state(false);
                self.states[start.0].epsilon_moves.push(left_start);
                self.states[start.0].epsilon_moves.push(right_start);
                self.states[left_finish.0].epsilon_moves.push(finish);
                self.states[left_finish.0].is_final = false;
                self.states[right_finish.0].epsilon_moves.push(finish);
                self.states[right_finish.0].is_final = false;
                (start, finish)
            }
            Regex::Repetition(inner) => {
                let (inner_start, inner_finish) = self.insert(inner);
                let finish = self.add_state(true);
                let start = self.add_state(false);
                self.states[start.0].epsilon_moves.push(inner_start);
                self.states[start.0].epsilon_moves.push(finish);
                self.states[inner_finish.0].is_final = false;
                self.states[inner_finish.0].epsilon_moves.push(start);
                (start, finish)
            }
            Regex::Group(inner) => self.insert(inner),
        }
    }

    fn insert_edges(&mut self, characters: impl IntoIterator<Item = char>) -> (StateId, StateId) {
        let finish = self.add_state(true);
        let start = self.add_state(false);
        for character in characters {
            self.states[start.0].movements.insert(character, finish);
        }
        (start, finish)
    }

    /// The smallest superset of `seed` closed under epsilon moves.
    fn epsilon_closure(&self, seed: &BTreeSet<StateId>) -> BTreeSet<StateId> {
        let mut closure = seed.clone();
        let mut pending: Vec<StateId> = seed.iter().copied().collect();
        while let Some(id) = pending.pop() {
            for &next in &self.states[id.0].epsilon_moves {
                if closure.insert(next) {
                    pending.push(next);
                }
            }
        }
        closure
    }

    fn contains_final(&self, states: &BTreeSet<StateId>) -> bool {
        states.iter().any(|id| self.states[id.0].is_final)
    }

    /// Subset construction. DFA states are epsilon closures of NFA state sets,
    /// interned by their sorted id sequence so identical closures collapse to
    /// one state.
    pub fn to_dfa(&self) -> Dfa {
        let mut states: Vec<DfaState> = Vec::new();
        let mut finals: BTreeSet<StateId> = BTreeSet::new();
        let mut interned: HashMap<Vec<StateId>, StateId> = HashMap::new();
        let mut unprocessed: VecDeque<(StateId, BTreeSet<StateId>)> = VecDeque::new();

        let start_closure = self.epsilon_closure(&BTreeSet::from([self.start]));
        let start = self.intern_closure(
            start_closure,
            &mut states,
            &mut finals,
            &mut interned,
            &mut unprocessed,
        );

        while let Some((id, closure)) = unprocessed.pop_front() {
            let mut movements: BTreeMap<char, BTreeSet<StateId>> = BTreeMap::new();
            for member in &closure {
                for (&character, &target) in &self.states[member.0].movements {
                    movements.entry(character).or_default().insert(target);
                }
            }
            for (character, targets) in movements {
                let target_closure = self.epsilon_closure(&targets);
                let target = self.intern_closure(
                    target_closure,
                    &mut states,
                    &mut finals,
                    &mut interned,
                    &mut unprocessed,
                );
                states[id.0].movements.insert(character, target);
            }
        }

        Dfa {
            states,
            start,
            finals,
        }
    }

    fn intern_closure(
        &self,
        closure: BTreeSet<StateId>,
        states: &mut Vec<DfaState>,
        finals: &mut BTreeSet<StateId>,
        interned: &mut HashMap<Vec<StateId>, StateId>,
        unprocessed: &mut VecDeque<(StateId, BTreeSet<StateId>)>,
    ) -> StateId {
        let key: Vec<StateId> = closure.iter().copied().collect();
        if let Some(&existing) = interned.get(&key) {
            return existing;
        }
        let id = StateId(states.len());
        let is_final = self.contains_final(&closure);
        states.push(DfaState {
            movements: BTreeMap::new(),
            is_final,
        });
        if is_final {
            finals.insert(id);
        }
        interned.insert(key, id);
        unprocessed.push_back((id, closure));
        id
    }
}

impl IMatcher for Nfa {
    /// Matching over a set of active states kept closed under epsilon moves.
    /// Memory is O(states); the DFA backends are derived from this semantics.
    fn match_prefix(&self, string: &str) -> Option<usize> {
        let mut states = self.epsilon_closure(&BTreeSet::from([self.start]));
        if string.is_empty() {
            return if self.contains_final(&states) {
                Some(0)
            } else {
                None
            };
        }
        let mut last_successful_end = None;
        for (i, character) in string.chars().enumerate() {
            let mut moved = BTreeSet::new();
            for id in &states {
                if let Some(&next) = self.states[id.0].movements.get(&character) {
                    moved.insert(next);
                }
            }
            if moved.is_empty() {
                break;
            }
            states = self.epsilon_closure(&moved);
            if self.contains_final(&states) {
                last_successful_end = Some(i + 1);
            }
        }
        last_successful_end
    }
}
