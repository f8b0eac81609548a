/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Constant-Reserve-Ratio bonding-curve math.
//!
//! The four functions below price conversions between a coin and the base
//! coin backing its reserve. They are consensus-critical: every validator must
//! compute bit-identical results, so all arithmetic is exact integer work on
//! [BigUint] — fractional exponents are evaluated through one shared
//! fixed-point routine ([pow_frac]) built on an integer Newton n-th root.
//!
//! With `volume` coins outstanding, `reserve` base coins backing them and a
//! reserve ratio of `crr` percent:
//!
//! ```text
//! purchase_return = volume  * ((1 + deposit / reserve) ^ (crr / 100) - 1)
//! sale_return     = reserve * (1 - (1 - sold / volume) ^ (100 / crr))
//! purchase_amount = reserve * ((1 + wanted / volume)   ^ (100 / crr) - 1)
//! sale_amount     = volume  * (1 - (1 - wanted / reserve) ^ (crr / 100))
//! ```

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};

/// Decimal digits of fixed-point precision carried through fractional
/// exponentiation. Changing this changes consensus.
const PRECISION_DIGITS: u32 = 40;

fn scale() -> BigUint {
    BigUint::from(10u8).pow(PRECISION_DIGITS)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Floor of the `n`-th root of `x`.
///
/// Newton iteration descending from a power-of-two over-estimate; the final
/// clamp makes the floor exact even on the iteration's off-by-one edge.
fn nth_root(x: &BigUint, n: u32) -> BigUint {
    if n == 1 || x.is_zero() || x.is_one() {
        return x.clone();
    }
    let big_n = BigUint::from(n);
    let n_minus_one = BigUint::from(n - 1);

    // 2^ceil(bits/n) >= x^(1/n)
    let shift = (x.bits() / n as u64) as usize + 1;
    let mut guess: BigUint = BigUint::one() << shift;
    loop {
        let next = (&guess * &n_minus_one + x / Pow::pow(&guess, n - 1)) / &big_n;
        if next >= guess {
            break;
        }
        guess = next;
    }
    while Pow::pow(&guess, n) > *x {
        guess -= BigUint::one();
    }
    guess
}

/// `⌊(num / den) ^ (p / q) · 10^PRECISION_DIGITS⌋` for positive `den`, `q`.
fn pow_frac(num: &BigUint, den: &BigUint, p: u32, q: u32) -> BigUint {
    let d = gcd(p, q);
    let (p, q) = (p / d, q / d);
    if num == den || p == 0 {
        return scale();
    }
    if q == 1 {
        return Pow::pow(num, p) * scale() / Pow::pow(den, p);
    }
    // ((num/den)^p * S^q) ^ (1/q) == (num/den)^(p/q) * S
    let radicand = Pow::pow(num, p) * Pow::pow(&scale(), q) / Pow::pow(den, p);
    nth_root(&radicand, q)
}

/// Coins received for depositing `deposit` base coins into the reserve.
pub fn purchase_return(volume: &BigUint, reserve: &BigUint, crr: u32, deposit: &BigUint) -> BigUint {
    if deposit.is_zero() {
        return BigUint::zero();
    }
    if crr == 100 {
        return volume * deposit / reserve;
    }
    let factor = pow_frac(&(reserve + deposit), reserve, crr, 100);
    volume * (factor - scale()) / scale()
}

/// Base coins released from the reserve for selling `sold` coins.
pub fn sale_return(volume: &BigUint, reserve: &BigUint, crr: u32, sold: &BigUint) -> BigUint {
    if sold.is_zero() {
        return BigUint::zero();
    }
    if sold >= volume {
        return reserve.clone();
    }
    if crr == 100 {
        return reserve * sold / volume;
    }
    let factor = pow_frac(&(volume - sold), volume, 100, crr);
    reserve * (scale() - factor) / scale()
}

/// Base coins that must be deposited to mint `wanted` coins.
pub fn purchase_amount(volume: &BigUint, reserve: &BigUint, crr: u32, wanted: &BigUint) -> BigUint {
    if wanted.is_zero() {
        return BigUint::zero();
    }
    if crr == 100 {
        return reserve * wanted / volume;
    }
    let factor = pow_frac(&(volume + wanted), volume, 100, crr);
    reserve * (factor - scale()) / scale()
}

/// Coins that must be sold to release `wanted` base coins from the reserve.
pub fn sale_amount(volume: &BigUint, reserve: &BigUint, crr: u32, wanted: &BigUint) -> BigUint {
    if wanted.is_zero() {
        return BigUint::zero();
    }
    if wanted >= reserve {
        return volume.clone();
    }
    if crr == 100 {
        return volume * wanted / reserve;
    }
    let factor = pow_frac(&(reserve - wanted), reserve, crr, 100);
    volume * (scale() - factor) / scale()
}
