use super::traits::Cursor;

/// An iterator over the elements produced by a cursor.
///
/// Each `next` call advances the cursor and, if an element exists, reads
/// its value. This drives materialization and `for` loops; note that it
/// reads every element it advances to, so operators that compute values
/// on read do so for each element yielded.
pub struct Items<C>
where
    C: Cursor,
{
    cursor: C,
}

impl<C> Items<C>
where
    C: Cursor,
{
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C> Iterator for Items<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            Some(self.cursor.current())
        } else {
            None
        }
    }
}
