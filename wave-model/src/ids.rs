/// Identifier of a user record.
///
/// Ids are assigned once, either by the listing endpoint or by the store on
/// local creation, and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub u64);

impl UserId {
    pub const fn new(raw: u64) -> Self {
        UserId(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Next free id after `ids`: one past the largest, or 1 when empty.
    pub fn next_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = UserId>,
    {
        let max = ids.into_iter().map(UserId::get).max().unwrap_or(0);
        UserId(max.saturating_add(1))
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        UserId(raw)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_after_uses_max_not_count() {
        let ids = [UserId(2), UserId(5), UserId(7)];
        assert_eq!(UserId::next_after(ids), UserId(8));
    }

    #[test]
    fn next_after_empty_starts_at_one() {
        assert_eq!(UserId::next_after(std::iter::empty()), UserId(1));
    }
}
