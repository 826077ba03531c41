//! Property-based tests for exact scalar arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn modulus() -> impl Strategy<Value = u64> {
        2u64..100_000u64
    }

    proptest! {
        #[test]
        fn integer_mul_distributes(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Integer::new(a), Integer::new(b), Integer::new(c));
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn residue_in_range(a in small_int(), m in modulus()) {
            let r = Integer::new(a).residue(m).unwrap();
            prop_assert!(r < m);
        }

        #[test]
        fn residue_respects_addition(a in small_int(), b in small_int(), m in modulus()) {
            let ra = Integer::new(a).residue(m).unwrap();
            let rb = Integer::new(b).residue(m).unwrap();
            let rs = (Integer::new(a) + Integer::new(b)).residue(m).unwrap();
            prop_assert_eq!(rs, (ra + rb) % m);
        }

        #[test]
        fn residue_respects_multiplication(a in small_int(), b in small_int(), m in modulus()) {
            let ra = u128::from(Integer::new(a).residue(m).unwrap());
            let rb = u128::from(Integer::new(b).residue(m).unwrap());
            let rp = (Integer::new(a) * Integer::new(b)).residue(m).unwrap();
            prop_assert_eq!(u128::from(rp), ra * rb % u128::from(m));
        }

        #[test]
        fn rational_sign_on_numerator(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(!r.denominator().is_negative());
            prop_assert_eq!(r.numerator() * Integer::new(d), Integer::new(n) * r.denominator());
        }
    }
}
