//! WAV file encoding.
//!
//! Persists synthesized sample buffers as standard uncompressed WAV
//! (mono, 44.1 kHz, 16-bit signed PCM) for delivery to clients.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{EngineError, Result};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

fn wav_spec() -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Writes samples to a WAV file at the given path.
pub fn write_wav(path: &Path, samples: &[i16]) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec())
        .map_err(|e| EngineError::audio_write_failed(format!("Failed to create WAV file: {}", e)))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| EngineError::audio_write_failed(format!("Failed to write sample: {}", e)))?;
    }
    writer
        .finalize()
        .map_err(|e| EngineError::audio_write_failed(format!("Failed to finalize WAV: {}", e)))
}

/// Encodes samples into an in-memory WAV byte buffer.
///
/// Used when the artifact is streamed to a client instead of written to
/// the cache directory.
pub fn write_wav_to_buffer(samples: &[i16]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, wav_spec())
            .map_err(|e| EngineError::audio_write_failed(format!("Failed to create WAV writer: {}", e)))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| EngineError::audio_write_failed(format!("Failed to write sample: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| EngineError::audio_write_failed(format!("Failed to finalize WAV: {}", e)))?;
    }
    Ok(cursor.into_inner())
}

/// Returns the playback duration in seconds for a mono sample count.
pub fn samples_to_duration(num_samples: usize) -> f32 {
    num_samples as f32 / SAMPLE_RATE as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;

    #[test]
    fn file_roundtrip_preserves_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples: Vec<i16> = (0..1000).map(|i| (i % 256) as i16).collect();

        write_wav(&path, &samples).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn buffer_encoding_is_riff() {
        let bytes = write_wav_to_buffer(&[0, 1, -1, 32767, -32768]).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }

    #[test]
    fn empty_buffer_still_encodes() {
        let bytes = write_wav_to_buffer(&[]).unwrap();
        assert!(bytes.len() >= 44);
    }

    #[test]
    fn duration_from_sample_count() {
        assert_eq!(samples_to_duration(44100), 1.0);
        assert_eq!(samples_to_duration(0), 0.0);
        assert!((samples_to_duration(22050) - 0.5).abs() < 1e-6);
    }
}
