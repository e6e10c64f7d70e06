//! Packed middlegame/endgame score pair.
//!
//! Both halves travel in one `i64` so that tapered constants can be added
//! with a single integer add. The halves are 32 bits each; extraction of
//! the endgame half first adds `0x8000_0000` so a borrow out of a negative
//! middlegame half cannot leak into it.

/// A (middlegame, endgame) centipawn pair packed into one `i64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score(i64);

/// Shorthand constructor, mirroring the table notation `S(mg, eg)`.
#[allow(non_snake_case)]
#[inline]
#[must_use]
pub const fn S(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

impl Score {
    pub const ZERO: Score = Score(0);

    #[inline]
    #[must_use]
    pub const fn new(mg: i32, eg: i32) -> Self {
        Score(((eg as i64) << 32).wrapping_add(mg as i64))
    }

    /// Middlegame half.
    #[inline]
    #[must_use]
    pub const fn mg(self) -> i32 {
        self.0 as i32
    }

    /// Endgame half. The bias term absorbs the borrow a negative
    /// middlegame half leaves in the upper word.
    #[inline]
    #[must_use]
    pub const fn eg(self) -> i32 {
        ((self.0.wrapping_add(0x8000_0000)) >> 32) as i32
    }

    /// Scale both halves by an integer factor.
    #[inline]
    #[must_use]
    pub const fn scale(self, k: i32) -> Self {
        Score::new(self.mg() * k, self.eg() * k)
    }
}

impl std::ops::Add for Score {
    type Output = Score;
    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score(self.0.wrapping_add(rhs.0))
    }
}

impl std::ops::Sub for Score {
    type Output = Score;
    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score(self.0.wrapping_sub(rhs.0))
    }
}

impl std::ops::Neg for Score {
    type Output = Score;
    #[inline]
    fn neg(self) -> Score {
        Score(0i64.wrapping_sub(self.0))
    }
}

impl std::ops::AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl std::ops::SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}
