//! DTMF Tone Rendering
//!
//! Pure two-tone synthesis for local keypad feedback. Playout is the host's
//! concern; this module only produces PCM samples.

/// Tone sample rate in Hz
pub const SAMPLE_RATE: u32 = 8000;

/// Tone duration in milliseconds
const DURATION_MS: u32 = 200;

/// Attack/release ramp in milliseconds, to avoid pops
const RAMP_MS: u32 = 10;

/// Peak amplitude as a fraction of full scale
const PEAK: f64 = 0.3;

/// The low/high frequency pair for a DTMF digit
pub fn tone_frequencies(digit: char) -> Option<(f64, f64)> {
    let pair = match digit {
        '1' => (697.0, 1209.0),
        '2' => (697.0, 1336.0),
        '3' => (697.0, 1477.0),
        'A' => (697.0, 1633.0),
        '4' => (770.0, 1209.0),
        '5' => (770.0, 1336.0),
        '6' => (770.0, 1477.0),
        'B' => (770.0, 1633.0),
        '7' => (852.0, 1209.0),
        '8' => (852.0, 1336.0),
        '9' => (852.0, 1477.0),
        'C' => (852.0, 1633.0),
        '*' => (941.0, 1209.0),
        '0' => (941.0, 1336.0),
        '#' => (941.0, 1477.0),
        'D' => (941.0, 1633.0),
        _ => return None,
    };
    Some(pair)
}

/// Render the audible tone for a keypad digit
///
/// Returns 200ms of 8kHz mono i16 samples with a short linear attack and
/// release, or `None` for an unknown digit.
pub fn tone(digit: char) -> Option<Vec<i16>> {
    let (low_freq, high_freq) = tone_frequencies(digit)?;

    let total = (SAMPLE_RATE * DURATION_MS / 1000) as usize;
    let ramp = (SAMPLE_RATE * RAMP_MS / 1000) as usize;
    let amplitude = PEAK * i16::MAX as f64;

    let samples = (0..total)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            let low = (2.0 * std::f64::consts::PI * low_freq * t).sin();
            let high = (2.0 * std::f64::consts::PI * high_freq * t).sin();

            let envelope = if i < ramp {
                i as f64 / ramp as f64
            } else if i >= total - ramp {
                (total - i) as f64 / ramp as f64
            } else {
                1.0
            };

            ((low + high) / 2.0 * amplitude * envelope) as i16
        })
        .collect();

    Some(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_sixteen_digits() {
        for digit in "1234567890*#ABCD".chars() {
            let samples = tone(digit).unwrap();
            assert_eq!(samples.len(), 1600); // 200ms at 8kHz
        }
    }

    #[test]
    fn unknown_digit_is_none() {
        assert!(tone('x').is_none());
        assert!(tone(' ').is_none());
    }

    #[test]
    fn tone_starts_and_ends_silent() {
        let samples = tone('5').unwrap();
        assert_eq!(samples[0], 0);
        // Last ramp sample is within one step of silence
        assert!(samples[samples.len() - 1].unsigned_abs() < 700);
    }

    #[test]
    fn tone_stays_within_peak_amplitude() {
        let samples = tone('8').unwrap();
        let ceiling = (0.31 * i16::MAX as f64) as i16;
        assert!(samples.iter().all(|s| s.abs() <= ceiling));
        // And actually carries energy
        assert!(samples.iter().any(|s| s.abs() > 1000));
    }
}
