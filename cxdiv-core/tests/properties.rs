use cxdiv_core::{classify, classify_f64, divide, Classification, F32Complex, F64Complex};
use proptest::prelude::*;

/// Any f64 bit pattern, weighted towards the special values.
fn any_component() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => any::<u64>().prop_map(f64::from_bits),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(0.0),
        1 => Just(-0.0),
        2 => -1e6f64..1e6,
    ]
}

/// Finite values up to half the f64 range, often near the top of it.
fn large_component() -> impl Strategy<Value = f64> {
    prop_oneof![
        -f64::MAX / 2.0..f64::MAX / 2.0,
        (1.0f64..2.0, 1000i32..1022, any::<bool>()).prop_map(|(m, e, negative)| {
            let x = m * 2f64.powi(e);
            if negative { -x } else { x }
        }),
    ]
}

fn matches_rule(re: f64, im: f64, class: Classification) -> bool {
    let any_nan = re.is_nan() || im.is_nan();
    let any_inf = re.is_infinite() || im.is_infinite();
    match class {
        Classification::NonZeroNaN => any_nan && any_inf,
        Classification::NaN => any_nan && !any_inf,
        Classification::Inf => any_inf && !any_nan,
        Classification::Zero => re == 0.0 && im == 0.0,
        Classification::NonZero => {
            re.is_finite() && im.is_finite() && (re != 0.0 || im != 0.0)
        }
    }
}

proptest! {
    #[test]
    fn classification_is_total_and_unique(re in any_component(), im in any_component()) {
        let class = classify(&F64Complex::new(re, im));
        let matching: Vec<_> = Classification::ALL
            .into_iter()
            .filter(|&c| matches_rule(re, im, c))
            .collect();
        prop_assert_eq!(matching, vec![class]);
        prop_assert_eq!(classify_f64(re, im), class);
    }

    #[test]
    fn nan_beside_infinity_is_non_zero_nan(
        nan_first in any::<bool>(),
        negative in any::<bool>(),
    ) {
        let inf = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        let (re, im) = if nan_first { (f64::NAN, inf) } else { (inf, f64::NAN) };
        prop_assert_eq!(classify(&F64Complex::new(re, im)), Classification::NonZeroNaN);
    }

    #[test]
    fn divide_never_panics(
        a in any_component(), b in any_component(),
        c in any_component(), d in any_component(),
    ) {
        let q = divide(F64Complex::new(a, b), F64Complex::new(c, d));
        let _ = classify(&q);
        let q = divide(F32Complex::from_f64_pair(a, b), F32Complex::from_f64_pair(c, d));
        let _ = classify(&q);
    }

    #[test]
    fn moderate_finite_quotients_stay_non_zero(
        a in -1e6f64..1e6, b in -1e6f64..1e6,
        c in 1e-3f64..1e6, d in -1e6f64..1e6,
    ) {
        prop_assume!(a != 0.0 || b != 0.0);
        let q = F64Complex::new(a, b) / F64Complex::new(c, d);
        prop_assert_eq!(classify(&q), Classification::NonZero);
    }

    #[test]
    fn large_finite_quotients_stay_non_zero(
        a in large_component(), b in large_component(),
        c in 1.0f64..1e6, d in -1e6f64..1e6,
    ) {
        prop_assume!(a.abs().max(b.abs()) >= 1e-200);
        let q = F64Complex::new(a, b) / F64Complex::new(c, d);
        prop_assert_eq!(classify(&q), Classification::NonZero, "{} / ({}, {})", q, c, d);
    }
}
