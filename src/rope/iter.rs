use super::Rope;

enum Frame<'r> {
    Node(&'r Rope),
    Leaf { data: &'r [char], index: usize },
    Repeat { rope: &'r Rope, remaining: usize },
}

/// Forward code-point iterator over a [Rope], walking the tree with an explicit
/// stack so deep or repeated subtrees cost no recursion.
pub struct Chars<'r> {
    stack: Vec<Frame<'r>>,
}

impl<'r> Chars<'r> {
    pub(super) fn new(rope: &'r Rope) -> Self {
        Self {
            stack: vec![Frame::Node(rope)],
        }
    }
}

impl<'r> Iterator for Chars<'r> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            match self.stack.pop()? {
                Frame::Node(rope) => match rope {
                    Rope::String(data) => {
                        if !data.is_empty() {
                            self.stack.push(Frame::Leaf {
                                data: data.as_slice(),
                                index: 0,
                            });
                        }
                    }
                    Rope::Concatenation(left, right) => {
                        self.stack.push(Frame::Node(right.as_ref()));
                        self.stack.push(Frame::Node(left.as_ref()));
                    }
                    Rope::Repetition(times, inner) => {
                        self.stack.push(Frame::Repeat {
                            rope: inner.as_ref(),
                            remaining: *times,
                        });
                    }
                },
                Frame::Leaf { data, index } => {
                    if index + 1 < data.len() {
                        self.stack.push(Frame::Leaf {
                            data,
                            index: index + 1,
                        });
                    }
                    return Some(data[index]);
                }
                Frame::Repeat { rope, remaining } => {
                    if remaining > 0 {
                        self.stack.push(Frame::Repeat {
                            rope,
                            remaining: remaining - 1,
                        });
                        self.stack.push(Frame::Node(rope));
                    }
                }
            }
        }
    }
}

/// Reverse code-point iterator over a [Rope]: right subtrees before left ones,
/// leaves backwards, repetitions as repeated reversed passes.
pub struct RevChars<'r> {
    stack: Vec<Frame<'r>>,
}

impl<'r> RevChars<'r> {
    pub(super) fn new(rope: &'r Rope) -> Self {
        Self {
            stack: vec![Frame::Node(rope)],
        }
    }
}

impl<'r> Iterator for RevChars<'r> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            match self.stack.pop()? {
                Frame::Node(rope) => match rope {
                    Rope::String(data) => {
                        if !data.is_empty() {
                            self.stack.push(Frame::Leaf {
                                data: data.as_slice(),
                                index: data.len() - 1,
                            });
                        }
                    }
                    Rope::Concatenation(left, right) => {
                        self.stack.push(Frame::Node(left.as_ref()));
                        self.stack.push(Frame::Node(right.as_ref()));
                    }
                    Rope::Repetition(times, inner) => {
                        self.stack.push(Frame::Repeat {
                            rope: inner.as_ref(),
                            remaining: *times,
                        });
                    }
                },
                Frame::Leaf { data, index } => {
                    if index > 0 {
                        self.stack.push(Frame::Leaf {
                            data,
                            index: index - 1,
                        });
                    }
                    return Some(data[index]);
                }
                Frame::Repeat { rope, remaining } => {
                    if remaining > 0 {
                        self.stack.push(Frame::Repeat {
                            rope,
                            remaining: remaining - 1,
                        });
                        self.stack.push(Frame::Node(rope));
                    }
                }
            }
        }
    }
}
