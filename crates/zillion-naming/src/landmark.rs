//! Celebrated zero counts

use std::fmt;

use zillion_core::ZeroCount;

/// A zero count worth announcing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Landmark {
    /// 10^100
    Googol,
    /// 10^303, the hundredth illion
    Centillion,
    /// 10^3003, the thousandth illion
    Millinillion,
}

impl Landmark {
    pub const ALL: [Landmark; 3] = [
        Landmark::Googol,
        Landmark::Centillion,
        Landmark::Millinillion,
    ];

    pub fn zero_count(self) -> ZeroCount {
        match self {
            Landmark::Googol => ZeroCount(100),
            Landmark::Centillion => ZeroCount(303),
            Landmark::Millinillion => ZeroCount(3003),
        }
    }

    /// Announcement shown when the count is reached
    pub fn message(self) -> &'static str {
        match self {
            Landmark::Googol => "This is a googol!",
            Landmark::Centillion => "One centillion! That's a LOT of zeros!",
            Landmark::Millinillion => "Millinillion! A thousand illions deep!",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Landmark at exactly this count, if any
pub fn landmark_for(zeros: ZeroCount) -> Option<Landmark> {
    Landmark::ALL
        .into_iter()
        .find(|landmark| landmark.zero_count() == zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmarks() {
        assert_eq!(landmark_for(ZeroCount(100)), Some(Landmark::Googol));
        assert_eq!(landmark_for(ZeroCount(303)), Some(Landmark::Centillion));
        assert_eq!(landmark_for(ZeroCount(3003)), Some(Landmark::Millinillion));
        assert_eq!(landmark_for(ZeroCount(101)), None);
        assert_eq!(landmark_for(ZeroCount(0)), None);
    }

    #[test]
    fn test_landmark_messages() {
        assert_eq!(Landmark::Googol.to_string(), "This is a googol!");
        assert_eq!(
            Landmark::Millinillion.message(),
            "Millinillion! A thousand illions deep!"
        );
    }
}
