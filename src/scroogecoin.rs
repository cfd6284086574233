use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An amount of coins.
/// The amount is signed so that a transaction declaring a negative output can be
/// represented, and then rejected by validation.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scroogecoin(i64);

impl Scroogecoin {
    pub const MAX: Scroogecoin = Scroogecoin(i64::MAX);

    pub const fn new(amount: i64) -> Self {
        Scroogecoin(amount)
    }

    pub const fn zero() -> Self {
        Self::new(0)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount widened so that sums of any number of amounts cannot overflow.
    pub fn to_i128(self) -> i128 {
        i128::from(self.0)
    }
}

impl From<i64> for Scroogecoin {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl Display for Scroogecoin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} SCR", self.0)
    }
}
