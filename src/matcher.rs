use crate::{Find, FindAll, IMatcher, Span, Substitution};
use std::fmt::{Display, Formatter};

/// Byte offset of every code point in `string`, with a trailing entry for the end
/// of the string, so code-point offset `i` maps to `string[starts[i]..]`.
pub(crate) fn char_starts(string: &str) -> Vec<usize> {
    let mut starts: Vec<usize> = string.char_indices().map(|(byte, _)| byte).collect();
    starts.push(string.len());
    starts
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl<'s> Find<'s> {
    pub fn new(string: &'s str, span: Span) -> Self {
        Self { string, span }
    }

    /// The matched part of the searched string.
    pub fn matched(&self) -> &'s str {
        let starts = char_starts(self.string);
        &self.string[starts[self.span.start]..starts[self.span.end]]
    }
}

impl<'m, 's, TMatcher: IMatcher> Iterator for FindAll<'m, 's, TMatcher> {
    type Item = Find<'s>;

    fn next(&mut self) -> Option<Find<'s>> {
        if self.exhausted {
            return None;
        }
        match self.matcher.find_from(self.string, self.offset) {
            Some(find) => {
                // A zero-length find would otherwise be found again at the same offset.
                self.offset = if find.span.is_empty() {
                    find.span.end + 1
                } else {
                    find.span.end
                };
                Some(find)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl Substitution for &str {
    fn substitute(&self, _: &Find) -> String {
        self.to_string()
    }
}

impl Substitution for String {
    fn substitute(&self, _: &Find) -> String {
        self.clone()
    }
}

impl<TF: Fn(&Find) -> String> Substitution for TF {
    fn substitute(&self, find: &Find) -> String {
        self(find)
    }
}
