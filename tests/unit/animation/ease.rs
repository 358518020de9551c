use super::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn every_curve_hits_its_endpoints() {
    for ease in Ease::ALL {
        // The Kivy elastic-in formulas leave a tiny residue at p = 0.
        let eps = match ease {
            Ease::InElastic | Ease::InOutElastic => 1e-3,
            _ => 1e-9,
        };
        assert!(approx(ease.apply(0.0), 0.0, eps), "{ease} at 0 = {}", ease.apply(0.0));
        assert!(approx(ease.apply(1.0), 1.0, 1e-9), "{ease} at 1 = {}", ease.apply(1.0));
    }
}

#[test]
fn in_out_curves_pass_through_midpoint() {
    for ease in [
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::InOutQuart,
        Ease::InOutQuint,
        Ease::InOutSine,
        Ease::InOutCirc,
    ] {
        assert!(approx(ease.apply(0.5), 0.5, 1e-9), "{ease}");
    }
}

#[test]
fn back_curves_overshoot() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn quad_matches_closed_form() {
    assert!(approx(Ease::InQuad.apply(0.3), 0.09, 1e-12));
    assert!(approx(Ease::OutQuad.apply(0.3), 0.51, 1e-12));
    assert!(approx(Ease::Linear.apply(0.42), 0.42, 1e-12));
}

#[test]
fn names_round_trip_through_from_str_and_serde() {
    for ease in Ease::ALL {
        assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.name()));
    }
    assert_eq!(" In_Out_Bounce ".parse::<Ease>().unwrap(), Ease::InOutBounce);
    assert!("wobble".parse::<Ease>().is_err());
}
