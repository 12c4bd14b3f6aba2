use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Modulus `|z|`, computed without intermediate overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }

    /// `1 / z` using Smith's algorithm. `None` at the origin.
    #[must_use]
    pub fn reciprocal(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        if self.real.abs() >= self.imag.abs() {
            let ratio = self.imag / self.real;
            let denom = self.real + self.imag * ratio;
            Some(Self {
                real: 1.0 / denom,
                imag: -ratio / denom,
            })
        } else {
            let ratio = self.real / self.imag;
            let denom = self.real * ratio + self.imag;
            Some(Self {
                real: ratio / denom,
                imag: -1.0 / denom,
            })
        }
    }

    /// Principal value of `self ^ exponent`.
    ///
    /// `z ^ 0` is one for every `z`, and a zero base yields zero for any other
    /// exponent.
    #[must_use]
    pub fn powc(&self, exponent: Self) -> Self {
        if exponent.is_zero() {
            return Self::ONE;
        }

        if self.is_zero() {
            return Self::ZERO;
        }

        let modulus = self.magnitude();
        let arg = self.imag.atan2(self.real);
        let mut length = modulus.powf(exponent.real);
        let mut phase = arg * exponent.real;

        if exponent.imag != 0.0 {
            length /= (arg * exponent.imag).exp();
            phase += exponent.imag * modulus.ln();
        }

        Self {
            real: length * phase.cos(),
            imag: length * phase.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
