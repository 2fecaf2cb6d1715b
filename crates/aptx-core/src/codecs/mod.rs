//! Codec implementations and factory

use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, CodecConfig, CodecType};

pub mod aptx;

/// Codec factory for creating codec instances
pub struct CodecFactory;

impl CodecFactory {
    /// Create a codec instance from configuration
    pub fn create(config: CodecConfig) -> Result<Box<dyn AudioCodec>> {
        // Validate configuration first
        config.validate()?;

        match config.codec_type {
            CodecType::Aptx => Ok(Box::new(aptx::AptxCodec::new(config)?)),

            #[cfg(feature = "aptx-hd")]
            CodecType::AptxHd => Ok(Box::new(aptx::AptxCodec::new(config)?)),

            #[cfg(not(feature = "aptx-hd"))]
            CodecType::AptxHd => Err(CodecError::feature_not_enabled("aptx-hd")),
        }
    }

    /// Create a codec by name
    pub fn create_by_name(name: &str, config: CodecConfig) -> Result<Box<dyn AudioCodec>> {
        let codec_type =
            CodecType::from_name(name).ok_or_else(|| CodecError::unsupported_codec(name))?;

        let config = CodecConfig {
            codec_type,
            ..config
        };

        Self::create(config)
    }

    /// Get all supported codec names
    pub fn supported_codecs() -> Vec<&'static str> {
        vec![
            "aptX",
            #[cfg(feature = "aptx-hd")]
            "aptX HD",
        ]
    }

    /// Check if a codec is supported
    pub fn is_supported(name: &str) -> bool {
        match CodecType::from_name(name) {
            Some(codec_type) => Self::supported_codecs().contains(&codec_type.name()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SampleRate;

    #[test]
    fn test_codec_factory_aptx() {
        let codec = CodecFactory::create(CodecConfig::aptx()).unwrap();
        assert_eq!(codec.info().name, "aptX");
        assert_eq!(codec.frame_size(), 4);
    }

    #[cfg(feature = "aptx-hd")]
    #[test]
    fn test_codec_factory_aptx_hd() {
        let config = CodecConfig::aptx_hd().with_sample_rate(SampleRate::Rate44100);
        let codec = CodecFactory::create(config).unwrap();
        let info = codec.info();
        assert_eq!(info.name, "aptX HD");
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.bitrate, 529_200);
    }

    #[cfg(not(feature = "aptx-hd"))]
    #[test]
    fn test_codec_factory_hd_disabled() {
        assert!(matches!(
            CodecFactory::create(CodecConfig::aptx_hd()),
            Err(CodecError::FeatureNotEnabled { .. })
        ));
    }

    #[test]
    fn test_codec_factory_by_name() {
        let codec = CodecFactory::create_by_name("APTX", CodecConfig::aptx_hd()).unwrap();
        assert_eq!(codec.info().name, "aptX");

        assert!(matches!(
            CodecFactory::create_by_name("sbc", CodecConfig::aptx()),
            Err(CodecError::UnsupportedCodec { .. })
        ));
    }

    #[test]
    fn test_codec_factory_rejects_invalid_config() {
        let config = CodecConfig::aptx().with_channels(1);
        assert!(CodecFactory::create(config).is_err());
    }

    #[test]
    fn test_supported_codecs() {
        assert!(CodecFactory::is_supported("aptx"));
        assert!(!CodecFactory::is_supported("ldac"));
        #[cfg(feature = "aptx-hd")]
        assert!(CodecFactory::is_supported("aptX-HD"));
    }
}
