use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier for registry records.
///
/// Stores `index + 1` so `Option<Id>` costs nothing extra.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Id of the first record in a collection.
    pub const FIRST: Id = Id(NonZeroU32::MIN);

    /// Create an Id from a 0-based index, or `None` for `u32::MAX`,
    /// which has no `index + 1`.
    pub fn from_index(index: u32) -> Option<Self> {
        NonZeroU32::new(index.checked_add(1)?).map(Self)
    }

    /// Create an Id for position `index` of a collection, or `None` if the
    /// position does not fit the id space.
    pub fn try_from_usize(index: usize) -> Option<Self> {
        Self::from_index(u32::try_from(index).ok()?)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Position of a building instance in the registry.
pub type BuildingId = Id;
/// Position of a zone within its building.
pub type ZoneId = Id;
