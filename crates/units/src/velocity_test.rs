mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::Velocity;

    #[test]
    fn test_velocity_conversions() {
        let v = Velocity::from_km_per_sec(100.0);
        assert_eq!(v.to_cm_per_sec(), 1e7);

        let v_cgs = Velocity::from_cm_per_sec(-3.0e6);
        assert_relative_eq!(v_cgs.to_km_per_sec(), -30.0);
    }

    #[test]
    fn test_infall_convention() {
        let infall = Velocity::from_cm_per_sec(-1.0e6);
        let outflow = Velocity::from_cm_per_sec(1.0e6);

        assert!(infall.is_infall());
        assert!(!outflow.is_infall());
        assert!(!Velocity::zero().is_infall());

        // Speed drops the sign
        assert_eq!(infall.speed(), outflow);
        assert_eq!(-infall, outflow);
    }

    #[test]
    fn test_velocity_operations() {
        let a = Velocity::from_km_per_sec(10.0);
        let b = Velocity::from_km_per_sec(20.0);

        assert_relative_eq!((a + b).to_km_per_sec(), 30.0);
        assert_relative_eq!((b - a).to_km_per_sec(), 10.0);
        assert_relative_eq!((a * 3.0).to_km_per_sec(), 30.0);
        assert_relative_eq!((b / 2.0).to_km_per_sec(), 10.0);
    }
}
