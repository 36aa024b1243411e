use super::Vector;
use crate::scalar::Real;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as a plain sequence of `N` components; the space tag is not written.
impl<T: Real + Serialize, const N: usize, S> Serialize for Vector<T, N, S> {
    fn serialize<Ser: Serializer>(&self, s: Ser) -> Result<Ser::Ok, Ser::Error> {
        s.collect_seq(self.as_slice())
    }
}

impl<'de, T: Real + Deserialize<'de>, const N: usize, S> Deserialize<'de> for Vector<T, N, S> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(d)?;
        let len = values.len();
        let components: [T; N] = values.try_into().map_err(|_| {
            let expected = format!("a sequence of {} components", N);
            D::Error::invalid_length(len, &expected.as_str())
        })?;
        Ok(Self::from_array(components))
    }
}
