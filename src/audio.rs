//! Audio cues
//!
//! Two short synthesized tones: a rising sine when switching environments
//! and a falling square click for buttons and pointer presses. Cues are
//! handed to an [`AudioSink`]; nothing waits on playback.

use std::f32::consts::TAU;

/// The cues the app can emit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Environment selected
    Switch,
    /// Button or pointer press
    Click,
}

impl AudioCue {
    /// The fixed tone envelope for this cue
    pub fn envelope(self) -> ToneEnvelope {
        match self {
            AudioCue::Switch => ToneEnvelope {
                waveform: Waveform::Sine,
                start_hz: 440.0,
                end_hz: 880.0,
                start_gain: 0.1,
                end_gain: 0.01,
                ramp_secs: 0.3,
                stop_secs: 0.5,
            },
            AudioCue::Click => ToneEnvelope {
                waveform: Waveform::Square,
                start_hz: 880.0,
                end_hz: 440.0,
                start_gain: 0.05,
                end_gain: 0.01,
                ramp_secs: 0.2,
                stop_secs: 0.5,
            },
        }
    }
}

/// Oscillator shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
}

/// Exponential frequency and gain ramps, then a hold until the stop time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneEnvelope {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    /// Length of both ramps in seconds
    pub ramp_secs: f32,
    /// Oscillator stop time in seconds
    pub stop_secs: f32,
}

impl ToneEnvelope {
    fn ramp(&self, from: f32, to: f32, t: f32) -> f32 {
        let progress = (t / self.ramp_secs).clamp(0.0, 1.0);
        from * (to / from).powf(progress)
    }

    /// Oscillator frequency at `t` seconds
    pub fn frequency_at(&self, t: f32) -> f32 {
        self.ramp(self.start_hz, self.end_hz, t)
    }

    /// Output gain at `t` seconds; silent after the stop time
    pub fn gain_at(&self, t: f32) -> f32 {
        if t >= self.stop_secs {
            return 0.0;
        }
        self.ramp(self.start_gain, self.end_gain, t)
    }

    /// Render mono PCM samples in `[-1, 1]` up to the stop time
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let sample_rate = sample_rate.max(1) as f32;
        let count = (self.stop_secs * sample_rate).round() as usize;
        let mut phase = 0.0f32;

        (0..count)
            .map(|n| {
                let t = n as f32 / sample_rate;
                let wave = match self.waveform {
                    Waveform::Sine => (phase * TAU).sin(),
                    Waveform::Square => if phase < 0.5 { 1.0 } else { -1.0 },
                };
                phase = (phase + self.frequency_at(t) / sample_rate).fract();
                wave * self.gain_at(t)
            })
            .collect()
    }
}

/// Destination for audio cues
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Sink that only logs cues
#[derive(Debug, Default)]
pub struct LogAudioSink {
    played: usize,
}

impl LogAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues played so far
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: AudioCue) {
        self.played += 1;
        let envelope = cue.envelope();
        log::debug!(
            "Audio cue {:?}: {:?} {:.0}->{:.0} Hz over {:.1}s",
            cue,
            envelope.waveform,
            envelope.start_hz,
            envelope.end_hz,
            envelope.ramp_secs
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_envelope() {
        let env = AudioCue::Switch.envelope();
        assert_eq!(env.waveform, Waveform::Sine);
        assert!((env.frequency_at(0.0) - 440.0).abs() < 1e-3);
        assert!((env.frequency_at(0.3) - 880.0).abs() < 1e-2);
        // Exponential ramp passes the geometric mean halfway
        assert!((env.frequency_at(0.15) - 622.25).abs() < 0.1);
        assert!((env.gain_at(0.0) - 0.1).abs() < 1e-6);
        assert!((env.gain_at(0.3) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_click_envelope() {
        let env = AudioCue::Click.envelope();
        assert_eq!(env.waveform, Waveform::Square);
        assert!((env.frequency_at(0.0) - 880.0).abs() < 1e-3);
        assert!((env.frequency_at(0.2) - 440.0).abs() < 1e-2);
        assert!((env.gain_at(0.0) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_gain_holds_then_stops() {
        let env = AudioCue::Click.envelope();
        assert!((env.gain_at(0.4) - 0.01).abs() < 1e-6);
        assert_eq!(env.gain_at(0.5), 0.0);
    }

    #[test]
    fn test_render_length_and_bounds() {
        let samples = AudioCue::Switch.envelope().render(8000);
        assert_eq!(samples.len(), 4000);
        assert!(samples.iter().all(|s| s.abs() <= 0.1 + 1e-6));
    }

    #[test]
    fn test_square_render_amplitude() {
        let samples = AudioCue::Click.envelope().render(8000);
        assert!((samples[0].abs() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogAudioSink::new();
        sink.play(AudioCue::Switch);
        sink.play(AudioCue::Click);
        assert_eq!(sink.played(), 2);
    }
}
