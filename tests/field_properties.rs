mod common;

use geomag::constants::{EARTH_R, NUMCOF};
use geomag::frames::spherical_to_itrs;
use geomag::models::{WMM2015, WMM2015V2, WMM2020};
use geomag::{coefficient_index, magnetic_field, ConstModel, ModelCoefficients, Truncated};
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::common::{assert_field_close, dipole_field, init_logger};

fn random_positions(seed: u64, count: usize) -> Vec<Vector3<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let lat = rng.random_range(-90.0..=90.0);
            let lon = rng.random_range(-180.0..180.0);
            let radius = EARTH_R + rng.random_range(-10_000.0..1_000_000.0);
            spherical_to_itrs(lat, lon, radius)
        })
        .collect()
}

#[test]
fn test_evaluation_is_deterministic() {
    init_logger();
    let positions = random_positions(42, 200);

    let first: Vec<_> = positions
        .iter()
        .map(|p| magnetic_field(2017.3, p, &WMM2015))
        .collect();
    let second: Vec<_> = positions
        .iter()
        .map(|p| magnetic_field(2017.3, p, &WMM2015))
        .collect();
    assert_eq!(first, second);

    // The model is a shared read-only static: concurrent evaluations see the same values
    let concurrent: Vec<Vec<Vector3<f32>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    positions
                        .iter()
                        .map(|p| magnetic_field(2017.3, p, &WMM2015))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("evaluation thread panicked"))
            .collect()
    });
    for result in concurrent {
        assert_eq!(result, first);
    }
}

#[test]
fn test_field_is_linear_in_time() {
    for position in random_positions(7, 50) {
        let b0 = magnetic_field(2020.0, &position, &WMM2020);
        let b1 = magnetic_field(2021.0, &position, &WMM2020);
        let b2 = magnetic_field(2022.0, &position, &WMM2020);

        let second_difference = (b0 - 2.0 * b1 + b2).norm();
        assert!(
            second_difference < 5.0e-10,
            "second difference {second_difference:e} at {position:?}"
        );
    }
}

#[test]
fn test_secular_variation_vanishes_at_epoch() {
    let mut frozen: ConstModel = WMM2015;
    frozen.secular_var_coeff_c = [0.0; NUMCOF];
    frozen.secular_var_coeff_s = [0.0; NUMCOF];

    for position in random_positions(3, 50) {
        assert_eq!(
            magnetic_field(2015.0, &position, &frozen),
            magnetic_field(2015.0, &position, &WMM2015)
        );
    }
}

#[test]
fn test_magnitude_on_reference_sphere() {
    for model in [&WMM2015, &WMM2015V2, &WMM2020] {
        for dyear in [model.epoch, model.epoch + 2.5] {
            for lat in (-90..=90).step_by(10) {
                for lon in (-180..180).step_by(20) {
                    let position = spherical_to_itrs(lat as f32, lon as f32, EARTH_R);
                    let magnitude = magnetic_field(dyear, &position, model).norm();
                    assert!(
                        (2.0e-5..=7.0e-5).contains(&magnitude),
                        "|B| = {magnitude:e} T at lat {lat}, lon {lon}, {dyear}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_truncated_model_is_a_dipole() {
    let dyear = 2016.5;
    let dipole = Truncated::new(&WMM2015, 1);
    let g10 = f64::from(WMM2015.c(1, 0, dyear));
    let g11 = f64::from(WMM2015.c(1, 1, dyear));
    let h11 = f64::from(WMM2015.s(1, 1, dyear));

    for position in random_positions(11, 50) {
        let b = magnetic_field(dyear, &position, &dipole);
        assert_field_close(&b, &dipole_field(g10, g11, h11, &position), 1.0e-5);
    }
}

#[test]
fn test_hand_built_dipole_model() {
    // Tilted dipole of the order of the geomagnetic one, nanotesla
    let mut model = ConstModel::zeroed(2000.0);
    model.main_field_coeff_c[coefficient_index(1, 0)] = -30_000.0;
    model.main_field_coeff_c[coefficient_index(1, 1)] = -2_000.0;
    model.main_field_coeff_s[coefficient_index(1, 1)] = 5_000.0;

    let position = Vector3::new(EARTH_R, 0.0, 0.0);
    let b = magnetic_field(2000.0, &position, &model);
    assert_field_close(
        &b,
        &dipole_field(-30_000.0, -2_000.0, 5_000.0, &position),
        1.0e-5,
    );

    let position = Vector3::new(1_234_567.0, -4_000_000.0, 5_100_000.0);
    let b = magnetic_field(2000.0, &position, &model);
    assert_field_close(
        &b,
        &dipole_field(-30_000.0, -2_000.0, 5_000.0, &position),
        1.0e-5,
    );
}

#[test]
fn test_out_of_window_dates_stay_finite() {
    for position in random_positions(5, 20) {
        for dyear in [1900.0, 2000.0, 2050.0, 2100.0] {
            let b = magnetic_field(dyear, &position, &WMM2020);
            assert!(b.iter().all(|c| c.is_finite()), "{b:?} at {dyear}");
        }
    }
}
