use uuid::Uuid;

use crate::error::{Caom2Error, Caom2Result};

/// Converts a UUID back to the 64-bit identifier it was built from.
///
/// Only UUIDs whose most significant 64 bits are zero are accepted, since
/// anything else cannot be represented without losing information. The least
/// significant 64 bits are read as a two's-complement signed integer, so this
/// is the exact inverse of [`long_to_uuid`].
///
/// # Errors
///
/// [`Caom2Error::LossyConversion`] if the high half is non-zero.
///
/// # Examples
///
/// ```
/// use caom2::conversions::{long_to_uuid, uuid_to_long};
///
/// let id = long_to_uuid(-42);
/// assert_eq!(uuid_to_long(&id).unwrap(), -42);
/// ```
pub fn uuid_to_long(uuid: &Uuid) -> Caom2Result<i64> {
    let (high, low) = uuid.as_u64_pair();
    if high != 0 {
        return Err(Caom2Error::LossyConversion(*uuid));
    }
    Ok(low as i64)
}

/// Builds a UUID whose least significant 64 bits hold `id`.
///
/// Negative identifiers are stored in two's-complement form, i.e. `-1`
/// becomes `00000000-0000-0000-ffff-ffffffffffff`.
pub fn long_to_uuid(id: i64) -> Uuid {
    Uuid::from_u64_pair(0, id as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids() {
        let uuid = long_to_uuid(3_735_928_559);
        assert_eq!(uuid.to_string(), "00000000-0000-0000-0000-0000deadbeef");
        assert_eq!(uuid_to_long(&uuid).unwrap(), 3_735_928_559);
    }

    #[test]
    fn negative_ids_use_twos_complement() {
        let uuid = long_to_uuid(-1);
        assert_eq!(uuid.to_string(), "00000000-0000-0000-ffff-ffffffffffff");
        assert_eq!(uuid_to_long(&uuid).unwrap(), -1);

        assert_eq!(uuid_to_long(&long_to_uuid(i64::MIN)).unwrap(), i64::MIN);
    }

    #[test]
    fn high_bits_are_lossy() {
        let uuid = Uuid::from_u64_pair(1, 5);
        assert_eq!(uuid_to_long(&uuid), Err(Caom2Error::LossyConversion(uuid)));
        assert!(uuid_to_long(&Uuid::new_v4()).is_err());
    }
}
