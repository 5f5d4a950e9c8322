use crate::domain::{FighterName, RatingValue};

#[derive(Debug, Clone, PartialEq)]
pub struct FighterRating {
    pub name: FighterName,
    pub current: RatingValue,
    pub peak: RatingValue,
}

impl FighterRating {
    pub fn new(name: &str, initial: RatingValue) -> Self {
        Self {
            name: name.to_string(),
            current: initial,
            peak: initial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingDelta {
    pub before: RatingValue,
    pub after: RatingValue,
}

impl RatingDelta {
    pub fn unchanged(rating: RatingValue) -> Self {
        Self {
            before: rating,
            after: rating,
        }
    }

    pub fn change(&self) -> RatingValue {
        self.after - self.before
    }
}

/// Rating movement of both participants, in argument order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChange {
    pub first: RatingDelta,
    pub second: RatingDelta,
}

impl RatingChange {
    /// Sum of both changes; zero for every rated update
    pub fn net_transfer(&self) -> RatingValue {
        self.first.change() + self.second.change()
    }
}
