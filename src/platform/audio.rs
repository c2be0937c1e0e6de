//! Buzzer synthesis and playback
//!
//! The call buzzer is a 1200 Hz square wave, chopped into 15 short
//! pulses over half a second at 0.4 gain. The waveform is rendered
//! up front as one PCM buffer and handed to the default output device.
//!
//! Machines without an audio device get a disabled buzzer; the
//! dashboard keeps working silently.

use anyhow::{Context, Result};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

pub const SAMPLE_RATE: u32 = 44_100;
pub const CARRIER_HZ: f32 = 1200.0;
pub const GAIN: f32 = 0.4;
pub const DURATION_SECS: f32 = 0.5;
/// Number of audible pulses within the buzz
pub const PULSE_COUNT: usize = 15;

/// Handle to the default audio output
///
/// The stream must stay alive for as long as anything may play, so the
/// application holds the buzzer for its whole run.
pub struct Buzzer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Buzzer {
    /// Open the default output device, or None when there is no audio
    pub fn open() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("No audio output device, buzzer disabled: {}", e);
                None
            }
        }
    }

    /// Play the call buzzer once, without blocking
    pub fn play(&self) -> Result<()> {
        let sink = Sink::try_new(&self.handle).context("Failed to create audio sink")?;
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, render_buzzer_samples()));
        sink.detach();
        Ok(())
    }
}

/// Render the complete buzzer waveform as mono PCM
///
/// The half second is split into 2 * PULSE_COUNT equal slots; even
/// slots carry the square wave, odd slots are silent. That yields 15
/// pulses of about 17ms each with matching gaps.
pub fn render_buzzer_samples() -> Vec<f32> {
    let total = (SAMPLE_RATE as f32 * DURATION_SECS) as usize;
    let slot_len = total / (PULSE_COUNT * 2);

    (0..total)
        .map(|i| {
            let slot = i / slot_len;
            if slot % 2 != 0 {
                return 0.0;
            }
            let t = i as f32 / SAMPLE_RATE as f32;
            let phase = (t * CARRIER_HZ).fract();
            if phase < 0.5 {
                GAIN
            } else {
                -GAIN
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_covers_half_a_second() {
        let samples = render_buzzer_samples();
        assert_eq!(samples.len(), 22_050);
    }

    #[test]
    fn test_gain_is_respected() {
        let samples = render_buzzer_samples();
        let peak = samples.iter().fold(0.0f32, |max, s| max.max(s.abs()));
        assert_eq!(peak, GAIN);
        assert!(samples.iter().all(|s| s.abs() <= GAIN));
    }

    #[test]
    fn test_fifteen_pulses_with_silent_gaps() {
        let samples = render_buzzer_samples();

        // The square wave never crosses zero inside a pulse, so each
        // silence-to-signal edge marks the start of one pulse.
        let mut starts = 0;
        let mut previous = 0.0f32;
        for &s in &samples {
            if s != 0.0 && previous == 0.0 {
                starts += 1;
            }
            previous = s;
        }
        assert_eq!(starts, PULSE_COUNT);

        // Odd slots are fully silent.
        let slot_len = samples.len() / (PULSE_COUNT * 2);
        let gap = &samples[slot_len..slot_len * 2];
        assert!(gap.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_pulse_starts_loud() {
        let samples = render_buzzer_samples();
        assert_eq!(samples[0], GAIN);
    }
}
