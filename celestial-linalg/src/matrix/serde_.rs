use super::Matrix;
use crate::scalar::Real;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as the flat column-major buffer of N² scalars, the same order as
/// [`Matrix::as_slice`]. The space tag is not written.
impl<T: Real + Serialize, const N: usize, S> Serialize for Matrix<T, N, S> {
    fn serialize<Ser: Serializer>(&self, s: Ser) -> Result<Ser::Ok, Ser::Error> {
        s.collect_seq(self.as_slice())
    }
}

impl<'de, T: Real + Deserialize<'de>, const N: usize, S> Deserialize<'de> for Matrix<T, N, S> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(d)?;
        if values.len() != N * N {
            let expected = format!("a column-major sequence of {} scalars", N * N);
            return Err(D::Error::invalid_length(values.len(), &expected.as_str()));
        }
        Self::from_column_major(&values).map_err(D::Error::custom)
    }
}
