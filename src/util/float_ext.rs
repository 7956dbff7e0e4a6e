pub trait FloatExt: Sized {
    const EPSILON: Self;

    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// `self != other`
    fn not_eq(self, other: Self) -> bool {
        !self.eq(other)
    }

    /// Largest value of the iterator, `0.0` if it is empty.
    fn max_of(iter: impl IntoIterator<Item = Self>) -> Self;
}

impl FloatExt for f64 {
    const EPSILON: Self = f64::EPSILON;

    fn eq(self, other: Self) -> bool {
        (self - other).abs() < Self::EPSILON
    }

    fn max_of(iter: impl IntoIterator<Item = Self>) -> Self {
        iter.into_iter().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_of_empty_is_zero() {
        assert!(FloatExt::eq(f64::max_of([]), 0.0));
        assert!(FloatExt::eq(f64::max_of([0.5, 3.0, 1.0]), 3.0));
    }
}
