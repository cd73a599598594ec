mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{EARTH_MASS_G, JUPITER_MASS_G};
    use crate::mass_rate::{MassRate, EARTH_MASS_PER_YEAR_G_S};

    #[test]
    fn test_mass_rate_conversions() {
        // Earth masses per year to grams per second
        let rate = MassRate::from_earth_masses_per_year(1.0);
        assert_eq!(rate.to_grams_per_second(), EARTH_MASS_PER_YEAR_G_S);

        // Round trip through g/s
        let original = 3.2e-4;
        let round_trip =
            MassRate::from_grams_per_second(MassRate::from_earth_masses_per_year(original).to_grams_per_second());
        assert_relative_eq!(round_trip.to_earth_masses_per_year(), original, max_relative = 1e-12);
    }

    #[test]
    fn test_folded_rate_constant_matches_earth_mass_per_year() {
        // 1.893e20 g/s is one Earth mass per Julian year, to the published precision
        let seconds_per_year = 365.25 * 24.0 * 3600.0;
        assert_relative_eq!(
            EARTH_MASS_G / seconds_per_year,
            EARTH_MASS_PER_YEAR_G_S,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_jupiter_masses_per_year() {
        let rate = MassRate::from_jupiter_masses_per_year(1e-3);
        let expected = 1e-3 * JUPITER_MASS_G / EARTH_MASS_G;
        assert_relative_eq!(rate.to_earth_masses_per_year(), expected);
        assert_relative_eq!(rate.to_jupiter_masses_per_year(), 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn test_log10_relative_to() {
        let pivot = MassRate::from_earth_masses_per_year(1e-2);

        assert_eq!(pivot.log10_relative_to(pivot), 0.0);
        assert_relative_eq!(
            MassRate::from_earth_masses_per_year(1e-5).log10_relative_to(pivot),
            -3.0,
            epsilon = 1e-12
        );

        // Non-positive rates are not rejected, they yield non-finite values
        let zero = MassRate::from_earth_masses_per_year(0.0);
        assert_eq!(zero.log10_relative_to(pivot), f64::NEG_INFINITY);
        let negative = MassRate::from_earth_masses_per_year(-1e-3);
        assert!(negative.log10_relative_to(pivot).is_nan());
    }

    #[test]
    fn test_mass_rate_arithmetic() {
        let rate1 = MassRate::from_earth_masses_per_year(6e-3);
        let rate2 = MassRate::from_earth_masses_per_year(4e-3);

        assert_relative_eq!((rate1 + rate2).to_earth_masses_per_year(), 1e-2, epsilon = 1e-15);
        assert_relative_eq!((rate1 - rate2).to_earth_masses_per_year(), 2e-3, epsilon = 1e-15);
        assert_relative_eq!((rate1 * 2.0).to_earth_masses_per_year(), 1.2e-2, epsilon = 1e-15);
        assert_relative_eq!((rate1 / 2.0).to_earth_masses_per_year(), 3e-3, epsilon = 1e-15);
        assert_relative_eq!((0.5 * rate2).to_earth_masses_per_year(), 2e-3, epsilon = 1e-15);
    }
}
