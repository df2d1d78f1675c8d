use super::{Dfa, DfaTable, Language, Regex};
use ptree::TreeItem;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

impl Regex {
    /// Sequences `left` and `right`, collapsing an `Epsilon` operand to the
    /// other operand.
    pub fn concatenation(left: Regex, right: Regex) -> Regex {
        match (left, right) {
            (Regex::Epsilon, right) => right,
            (left, Regex::Epsilon) => left,
            (left, right) => Regex::Concatenation(Rc::new(left), Rc::new(right)),
        }
    }

    /// Alternates `left` and `right`, collapsing an `Epsilon` operand to the
    /// other operand.
    pub fn union(left: Regex, right: Regex) -> Regex {
        match (left, right) {
            (Regex::Epsilon, right) => right,
            (left, Regex::Epsilon) => left,
            (left, right) => Regex::Union(Rc::new(left), Rc::new(right)),
        }
    }

    pub fn repetition(inner: Regex) -> Regex {
        Regex::Repetition(Rc::new(inner))
    }

    pub fn group(inner: Regex) -> Regex {
        Regex::Group(Rc::new(inner))
    }

    /// Determinizes the Thompson NFA by subset construction.
    pub fn to_dfa(&self) -> Dfa {
        self.to_nfa().to_dfa()
    }

    /// Flattens the DFA into a transition table.
    pub fn to_dfa_table(&self) -> DfaTable {
        self.to_dfa().to_dfa_table()
    }

    /// Compiles to the fastest backend. Every construct is supported by every
    /// backend, so this always succeeds and always returns the table.
    pub fn compile(&self) -> DfaTable {
        self.to_dfa_table()
    }

    /// Pretty print the syntax tree to stdout.
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(self)
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Language::default().format(self))
    }
}

impl TreeItem for Regex {
    type Child = Regex;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        match self {
            Regex::Epsilon => write!(f, "Epsilon"),
            Regex::Any(_) => write!(f, "Any"),
            Regex::Character(character) => write!(f, "Character {:?}", character),
            Regex::Concatenation(..) => write!(f, "Concatenation"),
            Regex::Union(..) => write!(f, "Union"),
            Regex::Repetition(_) => write!(f, "Repetition"),
            Regex::Group(_) => write!(f, "Group"),
            Regex::Either(_) | Regex::Neither(..) => {
                write!(f, "Class {}", Language::default().format(self))
            }
        }
    }

    fn children(&self) -> std::borrow::Cow<[Self::Child]> {
        let children = match self {
            Regex::Concatenation(left, right) | Regex::Union(left, right) => {
                vec![(**left).clone(), (**right).clone()]
            }
            Regex::Repetition(inner) | Regex::Group(inner) => vec![(**inner).clone()],
            _ => Vec::new(),
        };
        std::borrow::Cow::from(children)
    }
}
