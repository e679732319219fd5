/// Logical keys understood by apps, independent of the windowing backend.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Space,
    Return,
    Escape,
    A,
    D,
    None,
}
