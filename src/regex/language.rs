use super::{Alphabet, ClassItem, Language, Regex};
use once_cell::unsync::OnceCell;
use std::collections::BTreeSet;
use std::rc::Rc;

impl Default for Language {
    fn default() -> Self {
        Self {
            escape: '\\',
            union: '|',
            group_begin: '(',
            group_end: ')',
            either_begin: '[',
            either_end: ']',
            neither_indicator: '^',
            zero_or_more: '*',
            one_or_more: '+',
            range: '-',
            any: '.',
            special_characters: OnceCell::new(),
            repetition_characters: OnceCell::new(),
            end_characters: OnceCell::new(),
        }
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.escape == other.escape
            && self.union == other.union
            && self.group_begin == other.group_begin
            && self.group_end == other.group_end
            && self.either_begin == other.either_begin
            && self.either_end == other.either_end
            && self.neither_indicator == other.neither_indicator
            && self.zero_or_more == other.zero_or_more
            && self.one_or_more == other.one_or_more
            && self.range == other.range
            && self.any == other.any
    }
}

impl Eq for Language {}

impl Language {
    pub fn with_escape(mut self, marker: char) -> Self {
        self.escape = marker;
        self.reset_derived()
    }
    pub fn with_union(mut self, marker: char) -> Self {
        self.union = marker;
        self.reset_derived()
    }
    pub fn with_group(mut self, begin: char, end: char) -> Self {
        self.group_begin = begin;
        self.group_end = end;
        self.reset_derived()
    }
    pub fn with_either(mut self, begin: char, end: char) -> Self {
        self.either_begin = begin;
        self.either_end = end;
        self.reset_derived()
    }
    pub fn with_neither_indicator(mut self, marker: char) -> Self {
        self.neither_indicator = marker;
        self.reset_derived()
    }
    pub fn with_zero_or_more(mut self, marker: char) -> Self {
        self.zero_or_more = marker;
        self.reset_derived()
    }
    pub fn with_one_or_more(mut self, marker: char) -> Self {
        self.one_or_more = marker;
        self.reset_derived()
    }
    pub fn with_range(mut self, marker: char) -> Self {
        self.range = marker;
        self.reset_derived()
    }
    pub fn with_any(mut self, marker: char) -> Self {
        self.any = marker;
        self.reset_derived()
    }

    fn reset_derived(mut self) -> Self {
        self.special_characters = OnceCell::new();
        self.repetition_characters = OnceCell::new();
        self.end_characters = OnceCell::new();
        self
    }

    /// The markers carrying syntactic meaning at the top level of a pattern.
    /// The neither indicator is not among them: it is special only directly
    /// after a class opening.
    pub fn special_characters(&self) -> &BTreeSet<char> {
        self.special_characters.get_or_init(|| {
            BTreeSet::from([
                self.escape,
                self.union,
                self.group_begin,
                self.group_end,
                self.either_begin,
                self.either_end,
                self.zero_or_more,
                self.one_or_more,
                self.range,
                self.any,
            ])
        })
    }

    pub fn repetition_characters(&self) -> &BTreeSet<char> {
        self.repetition_characters
            .get_or_init(|| BTreeSet::from([self.zero_or_more, self.one_or_more]))
    }

    pub fn end_characters(&self) -> &BTreeSet<char> {
        self.end_characters
            .get_or_init(|| BTreeSet::from([self.group_end, self.either_end]))
    }

    pub fn group_characters(&self) -> (char, char) {
        (self.group_begin, self.group_end)
    }

    pub fn either_characters(&self) -> (char, char) {
        (self.either_begin, self.either_end)
    }

    /// Renders `character` for this surface syntax, prefixing the escape marker
    /// where the character would otherwise be read as an instruction.
    pub fn escape_character(&self, character: char) -> String {
        if self.special_characters().contains(&character) || character == self.neither_indicator {
            let mut escaped = String::with_capacity(2);
            escaped.push(self.escape);
            escaped.push(character);
            escaped
        } else {
            character.to_string()
        }
    }

    pub fn escape_string(&self, string: &str) -> String {
        string
            .chars()
            .map(|character| self.escape_character(character))
            .collect()
    }

    /// Renders a [Regex] back to surface syntax in this language. Parsing the
    /// result yields the same tree again, modulo the `+` desugaring which never
    /// appears in an AST.
    pub fn format(&self, regex: &Regex) -> String {
        match regex {
            Regex::Epsilon => String::new(),
            Regex::Any(_) => self.any.to_string(),
            Regex::Character(character) => self.escape_character(*character),
            Regex::Concatenation(left, right) => {
                format!("{}{}", self.format(left), self.format(right))
            }
            Regex::Union(left, right) => {
                format!("{}{}{}", self.format(left), self.union, self.format(right))
            }
            Regex::Repetition(inner) => format!("{}{}", self.format(inner), self.zero_or_more),
            Regex::Group(inner) => {
                format!("{}{}{}", self.group_begin, self.format(inner), self.group_end)
            }
            Regex::Either(items) => format!(
                "{}{}{}",
                self.either_begin,
                self.format_class(items),
                self.either_end
            ),
            Regex::Neither(items, _) => format!(
                "{}{}{}{}",
                self.either_begin,
                self.neither_indicator,
                self.format_class(items),
                self.either_end
            ),
        }
    }

    fn format_class(&self, items: &BTreeSet<ClassItem>) -> String {
        items
            .iter()
            .map(|item| match item {
                ClassItem::Character(character) => self.escape_character(*character),
                ClassItem::Range(start, end, _) => format!(
                    "{}{}{}",
                    self.escape_character(*start),
                    self.range,
                    self.escape_character(*end)
                ),
            })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::Full
    }
}

impl Alphabet {
    pub fn contains(&self, character: char) -> bool {
        match self {
            Alphabet::Full => true,
            Alphabet::Chars(set) => set.contains(&character),
        }
    }

    /// The code points of the alphabet in ascending order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = char> + '_> {
        match self {
            Alphabet::Full => Box::new('\u{0}'..=char::MAX),
            Alphabet::Chars(set) => Box::new(set.iter().copied()),
        }
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Alphabet::Chars(Rc::new(iter.into_iter().collect()))
    }
}

impl From<&str> for Alphabet {
    fn from(characters: &str) -> Self {
        characters.chars().collect()
    }
}
