//! Pure numeric computations behind the endpoints

use num_bigint::BigUint;

/// `n!` as an iterative product; `0! = 1`
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, k| acc * k)
}

/// n-th Fibonacci number, iterating from `(0, 1)`
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::from(0u32);
    let mut b = BigUint::from(1u32);
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}

/// One element of a `/mean` array
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    Integer(i128),
    Float(f64),
}

/// Largest magnitude below which every integer is an exact `f64`
const EXACT_F64_LIMIT: u128 = 1 << 53;

/// Running total: exact while only integers have been seen
enum Sum {
    Exact(i128),
    Float(f64),
}

impl Sum {
    #[allow(clippy::cast_precision_loss)]
    fn add(self, term: Term) -> Self {
        match (self, term) {
            (Self::Exact(acc), Term::Integer(v)) => match acc.checked_add(v) {
                Some(total) => Self::Exact(total),
                None => Self::Float(acc as f64 + v as f64),
            },
            (Self::Exact(acc), Term::Float(v)) => Self::Float(acc as f64 + v),
            (Self::Float(acc), Term::Integer(v)) => Self::Float(acc + v as f64),
            (Self::Float(acc), Term::Float(v)) => Self::Float(acc + v),
        }
    }
}

/// Arithmetic mean, summed left to right; `None` for an empty slice.
///
/// Integers are summed exactly until the first float. An all-integer total
/// is divided with a single rounding while it fits the `f64` mantissa, and
/// with its remainder kept separate beyond that.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[Term]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let count = values.len() as f64;
    let total = values.iter().fold(Sum::Exact(0), |acc, &term| acc.add(term));
    Some(match total {
        Sum::Exact(sum) if sum.unsigned_abs() <= EXACT_F64_LIMIT => sum as f64 / count,
        Sum::Exact(sum) => {
            let len = i128::try_from(values.len()).unwrap_or(i128::MAX);
            let (quotient, remainder) = (sum / len, sum % len);
            quotient as f64 + remainder as f64 / count
        }
        Sum::Float(sum) => sum / count,
    })
}
