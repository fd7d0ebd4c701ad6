use metron_core::Config;
use metron_units::{ConversionDomain, Converter, Measurement, Relation};
use proptest::prelude::*;

fn any_domain() -> impl Strategy<Value = ConversionDomain> {
    prop::sample::select(ConversionDomain::ALL.to_vec())
}

type UnitPair = (ConversionDomain, &'static str, &'static str);

fn unit_pair(domain: ConversionDomain) -> impl Strategy<Value = UnitPair> {
    let units = domain.units().to_vec();
    (prop::sample::select(units.clone()), prop::sample::select(units))
        .prop_map(move |(from, to)| (domain, from, to))
}

fn distance_unit() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ConversionDomain::Distance.units().to_vec())
}

/// Magnitude of d(to)/d(from); every formula is linear or affine.
fn scale(domain: ConversionDomain, from: &str, to: &str) -> f64 {
    let at_zero = domain.formula(0.0, from, to).unwrap();
    let at_one = domain.formula(1.0, from, to).unwrap();
    (at_one - at_zero).abs()
}

proptest! {
    #[test]
    fn formula_identity_is_bit_exact(
        domain in any_domain(),
        value in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        for unit in domain.units() {
            let result = domain.formula(value, unit, unit).unwrap();
            prop_assert_eq!(result.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn identity_keeps_values_already_at_precision(
        domain in any_domain(),
        cents in -1_000_000_000i64..1_000_000_000,
    ) {
        let converter = Converter::default();
        let value = cents as f64 / 100.0;
        for unit in domain.units() {
            let result = converter.convert(domain.name(), value, Some(*unit), Some(*unit)).unwrap();
            prop_assert_eq!(result, value);
        }
    }

    #[test]
    fn round_trip_drift_is_bounded(
        (domain, from, to) in any_domain().prop_flat_map(unit_pair),
        value in -1.0e6f64..1.0e6,
        precision in 0u32..7,
    ) {
        let converter = Converter::new(Config::default().with_precision(precision));
        let there = converter.convert(domain.name(), value, Some(from), Some(to)).unwrap();
        let back = converter.convert(domain.name(), there, Some(to), Some(from)).unwrap();

        // half a unit in the last place on the way there, scaled back,
        // plus half a unit in the last place on the way back
        let half_step = 0.5 * 10f64.powi(-(precision as i32));
        let tolerance = half_step * (scale(domain, to, from) + 1.0) + 1e-9 * (1.0 + value.abs());
        prop_assert!(
            (back - value).abs() <= tolerance,
            "{} {} -> {} -> {}: {} came back as {} (tolerance {})",
            domain, from, to, from, value, back, tolerance
        );
    }

    #[test]
    fn comparison_is_antisymmetric(
        a in -1.0e6f64..1.0e6,
        unit_a in distance_unit(),
        b in -1.0e6f64..1.0e6,
        unit_b in distance_unit(),
    ) {
        let converter = Converter::default();
        let forward = converter
            .compare(Measurement::new(a, unit_a), Measurement::new(b, unit_b))
            .unwrap();
        let backward = converter
            .compare(Measurement::new(b, unit_b), Measurement::new(a, unit_a))
            .unwrap();

        let expected = match forward.relation {
            Relation::Greater => Relation::Less,
            Relation::Less => Relation::Greater,
            Relation::Equal => Relation::Equal,
        };
        prop_assert_eq!(backward.relation, expected);
    }

    #[test]
    fn results_are_rounded_to_precision(
        (domain, from, to) in any_domain().prop_flat_map(unit_pair),
        value in -1.0e6f64..1.0e6,
    ) {
        let converter = Converter::default();
        let result = converter.convert(domain.name(), value, Some(from), Some(to)).unwrap();
        let text = format!("{}", result);
        let decimals = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
        prop_assert!(decimals <= 2, "{} has more than two decimals", text);
    }
}
