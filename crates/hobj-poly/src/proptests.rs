//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use hobj_rings::traits::Ring;
    use hobj_rings::Z;

    fn small_coeff() -> impl Strategy<Value = Z> {
        (-50i64..50i64).prop_map(Z::new)
    }

    fn small_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec(small_coeff(), 0..=8).prop_map(DensePoly::new)
    }

    fn large_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec(small_coeff(), 101..=260).prop_map(DensePoly::new)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&DensePoly::one()), a);
        }

        #[test]
        fn poly_no_leading_zero(a in small_poly(), b in small_poly()) {
            let s = a.add(&b.neg());
            prop_assert!(s.leading_coeff().map_or(true, |c| !c.is_zero()));
        }

        #[test]
        fn poly_eval_is_homomorphic(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            let x = Z::new(x);
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_shift_is_mul_by_monomial(a in small_poly(), n in 0usize..6) {
            prop_assert_eq!(a.shift(n), a.mul(&DensePoly::monomial(Z::one(), n)));
        }

        #[test]
        fn karatsuba_matches_schoolbook(a in large_poly(), b in large_poly()) {
            prop_assert_eq!(a.mul_karatsuba(&b), a.mul_schoolbook(&b));
        }
    }
}
