/// An `f64` carried as an unevaluated `hi + lo` pair.
///
/// Every addition is error-free (Knuth two-sum), so adding `d` and then `-d`
/// restores the original value bit for bit. `hi` is kept normalised, so it is
/// always the nearest `f64` to the represented value.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CompensatedF64 {
    hi: f64,
    lo: f64,
}

impl CompensatedF64 {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.hi
    }

    pub fn add(&mut self, delta: f64) {
        let (sum, err) = two_sum(self.hi, delta);
        let (hi, lo) = quick_two_sum(sum, err + self.lo);

        self.hi = hi;
        self.lo = lo;
    }
}

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

#[inline]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}
