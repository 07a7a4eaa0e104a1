use crate::chess::MoveRecord;
use derive_more::Deref;

/// The moves played so far, oldest first.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref)]
pub struct History(Vec<MoveRecord>);

impl History {
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.0.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.0.pop()
    }
}
