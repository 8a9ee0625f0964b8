use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModularError {
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: u64, modulus: u64 },
    #[error("modulus {0} is out of range, it must be in [2, 2^63)")]
    InvalidModulus(u64),
}

/// Extended euclidean algorithm; returns `(gcd, x, y)` with `a*x + b*y = gcd`.
///
/// The gcd is always non-negative, the signs of the inputs are folded into the
/// coefficients.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a.abs(), b.abs());
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    let x = if a < 0 { -old_x } else { old_x };
    let y = if b < 0 { -old_y } else { old_y };
    (old_r, x, y)
}

/// Reduce a possibly negative value into `[0, modulus)`.
pub fn normalize(value: i64, modulus: u64) -> u64 {
    value.rem_euclid(modulus as i64) as u64
}

/// Find `x` such that `(a * x) mod m == 1`.
///
/// Fails if `gcd(a, m) != 1`. For the power of two moduli used by the predictors
/// this means `a` has to be odd. The modulus must lie in `[2, 2^63)`.
pub fn mod_inverse(a: u64, m: u64) -> Result<u64, ModularError> {
    if m < 2 || m > i64::MAX as u64 {
        return Err(ModularError::InvalidModulus(m));
    }
    let value = a % m;
    let (gcd, x, _) = extended_gcd(value as i64, m as i64);
    if gcd != 1 {
        return Err(ModularError::NotInvertible { value, modulus: m });
    }
    Ok(normalize(x, m))
}
