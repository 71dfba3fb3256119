use crate::Aircraft;

/// The holding pattern: aircraft waiting for a landing slot, lowest fuel first
pub trait HoldingPattern {
    /// Aircraft currently holding, front of the queue first
    type Waiting<'a>: Iterator<Item = &'a Aircraft>
    where
        Self: 'a;

    /// Returns the holding aircraft in landing order without disturbing them
    fn waiting<'a>(&'a self) -> Self::Waiting<'a>;

    /// Places an aircraft behind every holding aircraft with no more fuel than it
    fn insert_ordered(&mut self, aircraft: Aircraft);

    /// Appends an aircraft to the back, regardless of its fuel
    fn push_back(&mut self, aircraft: Aircraft);

    /// Removes the aircraft at the front, if any
    fn pop_front(&mut self) -> Option<Aircraft>;

    /// Returns the aircraft at the front, if any
    fn peek_front(&self) -> Option<&Aircraft>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every holding aircraft
    fn clear(&mut self);
}
