/// Rothfusz regression, evaluated on the raw form values.
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    let t = temperature;
    let h = humidity;
    -42.379 + 2.04901523 * t + 10.14333127 * h
        - 0.22475541 * t * h
        - 6.83783e-03 * t.powi(2)
        - 5.481717e-02 * h.powi(2)
        + 1.22874e-03 * t.powi(2) * h
        + 8.5282e-04 * t * h.powi(2)
        - 1.99e-06 * t.powi(2) * h.powi(2)
}

pub fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
    let v = wind_speed.powf(0.16);
    13.12 + 0.6215 * temperature - 11.37 * v + 0.3965 * temperature * v
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn heat_index_matches_closed_form_over_grid() {
        let mut t: f64 = -50.0;
        while t <= 50.0 {
            for h in (0..=100).step_by(5) {
                let h = h as f64;
                let expected = -42.379 + 2.04901523 * t + 10.14333127 * h
                    - 0.22475541 * t * h
                    - 6.83783e-03 * t * t
                    - 5.481717e-02 * h * h
                    + 1.22874e-03 * t * t * h
                    + 8.5282e-04 * t * h * h
                    - 1.99e-06 * t * t * h * h;
                assert!(close(heat_index(t, h), expected), "t={} h={}", t, h);
            }
            t += 2.5;
        }
    }

    #[test]
    fn heat_index_known_point() {
        // T=25, H=50 on the default form.
        let hi = heat_index(25.0, 50.0);
        assert!((hi - 182.342113).abs() < 1e-6, "got {}", hi);
    }

    #[test]
    fn wind_chill_matches_closed_form_over_grid() {
        let mut t: f64 = -50.0;
        while t <= 50.0 {
            let mut v: f64 = 0.0;
            while v <= 150.0 {
                let p = v.powf(0.16);
                let expected = 13.12 + 0.6215 * t - 11.37 * p + 0.3965 * t * p;
                assert!(close(wind_chill(t, v), expected), "t={} v={}", t, v);
                v += 7.5;
            }
            t += 2.5;
        }
    }

    #[test]
    fn wind_chill_without_wind_is_linear_in_temperature() {
        assert!(close(wind_chill(0.0, 0.0), 13.12));
        assert!(close(wind_chill(10.0, 0.0), 13.12 + 6.215));
    }
}
