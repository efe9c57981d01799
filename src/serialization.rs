//! Serialization of fitted model state.
//!
//! Only plain host data (`Vec<f64>`, scalars, flags) is serialized, never backend
//! tensors, so a model saved from one backend loads into any other.

use crate::error::Result;
use std::path::Path;

/// Plain-data representations that can be written to and read from bytes.
pub trait SerializableParams: Sized {
    fn to_bytes(&self) -> Result<Vec<u8>>;

    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(feature = "serde")]
impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::error::ElasticNetError;
    use crate::history::Iterate;

    #[test]
    fn test_bytes_roundtrip_is_exact() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let it = Iterate {
            epoch: 3,
            weights: vec![0.1, -1.0 / 3.0, f64::MIN_POSITIVE],
            bias: 1e-300,
            cost: 0.125,
        };
        let restored = Iterate::from_bytes(&it.to_bytes()?)?;
        assert_eq!(restored, it);
        Ok(())
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let it = Iterate {
            epoch: 1,
            weights: vec![1.0, 2.0],
            bias: 0.0,
            cost: 0.0,
        };
        let bytes = it.to_bytes().unwrap();
        let res = Iterate::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(res, Err(ElasticNetError::Serialization(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = Iterate::load_from_file(dir.path().join("missing.bin"));
        assert!(matches!(res, Err(ElasticNetError::Io(_))));
    }
}
