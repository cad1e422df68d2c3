use std::ops::{Add, Mul};

/// A point on the complex plane, `re + im·i`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_sqr() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sqr(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).norm_sqr(), 25.0);
        assert_eq!(Complex::default().norm_sqr(), 0.0);
    }

    #[test]
    fn test_add() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(sum, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square_matches_component_form() {
        // a² - b² and 2ab
        let z = Complex::new(2.0, 3.0);

        assert_eq!(z.square(), Complex::new(-5.0, 12.0));
    }
}
