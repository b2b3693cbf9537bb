// src/quantum/complex.rs
//! Complex scalars used by the simulator
//!
//! Amplitudes and matrix entries are `num_complex::Complex64` values; the
//! arithmetic (`+`, `-`, `*`) comes straight from that type.

pub use num_complex::Complex64;

/// 0 + 0i
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// 1 + 0i
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// The imaginary unit i
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// 1/sqrt(2)
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Modulus `sqrt(re² + im²)` of a complex number
pub fn modulus(z: Complex64) -> f64 {
    z.norm()
}

/// Compare two complex numbers within `epsilon`
pub fn approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}
