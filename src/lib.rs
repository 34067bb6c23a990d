use std::os::raw::c_double;

pub mod consts;
pub mod error;
#[cfg(feature = "plot")]
pub mod plot;
pub mod range;
pub mod tuning;
pub mod utils;

pub use error::{Error, Result};
pub use range::{LinearRange, LogRange, ParamRange};
pub use tuning::Tuning;

#[no_mangle]
pub extern "C" fn cp3_unsigned_norm_to_param(t: c_double, min: c_double, max: c_double) -> c_double {
    utils::unsigned_norm_to_param(t, min, max)
}

#[no_mangle]
pub extern "C" fn cp3_param_to_unsigned_norm(p: c_double, min: c_double, max: c_double) -> c_double {
    utils::param_to_unsigned_norm(p, min, max)
}

#[no_mangle]
pub extern "C" fn cp3_unsigned_n_to_signed_n(t: c_double) -> c_double {
    utils::unsigned_n_to_signed_n(t)
}

#[no_mangle]
pub extern "C" fn cp3_signed_n_to_unsigned_n(t: c_double) -> c_double {
    utils::signed_n_to_unsigned_n(t)
}

#[no_mangle]
pub extern "C" fn cp3_signed_norm_to_param(t: c_double, min: c_double, max: c_double) -> c_double {
    utils::signed_norm_to_param(t, min, max)
}

#[no_mangle]
pub extern "C" fn cp3_param_to_signed_norm(p: c_double, min: c_double, max: c_double) -> c_double {
    utils::param_to_signed_norm(p, min, max)
}

#[no_mangle]
pub extern "C" fn cp3_unsigned_norm_to_log(t: c_double, min: c_double, max: c_double) -> c_double {
    utils::unsigned_norm_to_log(t, min, max)
}

#[no_mangle]
pub extern "C" fn cp3_log_to_unsigned_norm(p: c_double, min: c_double, max: c_double) -> c_double {
    utils::log_to_unsigned_norm(p, min, max)
}

#[no_mangle]
pub extern "C" fn cp3_lin_to_log(
    lin: c_double,
    lin_min: c_double,
    lin_max: c_double,
    log_min: c_double,
    log_max: c_double,
) -> c_double {
    utils::lin_to_log(lin, lin_min, lin_max, log_min, log_max)
}

#[no_mangle]
pub extern "C" fn cp3_midi_note_to_hz(note: c_double) -> c_double {
    utils::midi_note_to_hz(note)
}

#[no_mangle]
pub extern "C" fn cp3_hz_to_midi_note(hz: c_double) -> c_double {
    utils::hz_to_midi_note(hz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_match_utils() {
        assert_eq!(cp3_unsigned_norm_to_param(0.5, 200.0, 400.0), 300.0);
        assert_eq!(cp3_param_to_unsigned_norm(300.0, 200.0, 400.0), 0.5);
        assert_eq!(cp3_unsigned_n_to_signed_n(0.5), 0.0);
        assert_eq!(cp3_signed_n_to_unsigned_n(0.0), 0.5);
        assert_eq!(cp3_signed_norm_to_param(0.0, 200.0, 400.0), 300.0);
        assert_eq!(cp3_param_to_signed_norm(300.0, 200.0, 400.0), 0.0);
        assert_eq!(
            cp3_unsigned_norm_to_log(0.3, 20.0, 20000.0),
            utils::unsigned_norm_to_log(0.3, 20.0, 20000.0)
        );
        assert_eq!(cp3_log_to_unsigned_norm(20000.0, 20.0, 20000.0), 1.0);
        assert_eq!(
            cp3_lin_to_log(64.0, 0.0, 127.0, 20.0, 20000.0),
            utils::lin_to_log(64.0, 0.0, 127.0, 20.0, 20000.0)
        );
        assert_eq!(cp3_midi_note_to_hz(69.0), 440.0);
        assert_eq!(cp3_hz_to_midi_note(880.0), 81.0);
    }

    #[test]
    fn exports_propagate_nan() {
        assert!(cp3_param_to_unsigned_norm(1.0, 1.0, 1.0).is_nan());
        assert!(cp3_unsigned_norm_to_log(0.5, -20.0, 20000.0).is_nan());
        assert!(cp3_log_to_unsigned_norm(-1.0, 20.0, 20000.0).is_nan());
    }

    #[test]
    fn callable_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let t = i as f64 / 7.0;
                    let hz = cp3_unsigned_norm_to_log(t, 20.0, 20000.0);
                    (t, cp3_log_to_unsigned_norm(hz, 20.0, 20000.0))
                })
            })
            .collect();
        for handle in handles {
            let (t, back) = handle.join().unwrap();
            assert!((t - back).abs() < 1e-12);
        }
    }
}
