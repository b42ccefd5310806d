//! World coordinate system transforms.

use std::fmt;

use super::EntityType;
use crate::error::Caom2Result;
use crate::validation::{value_check, Override};

/// A `(pix, val)` reference point of a transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefCoord {
    /// Pixel coordinate (unit: pix).
    pub pix: f64,
    /// World coordinate at `pix`.
    pub val: f64,
}

crate::define_entity_type!(RefCoord, EntityType::RefCoord);

impl RefCoord {
    pub fn new(pix: f64, val: f64) -> Self {
        Self { pix, val }
    }
}

impl fmt::Display for RefCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pix, self.val)
    }
}

/// A linear function transforming pixel coordinates to world coordinates
/// along one axis.
///
/// The axis length, the slope and a reference coordinate are all required
/// for a valid function.
///
/// # Examples
///
/// ```
/// use caom2::core::{CoordFunction1D, RefCoord};
///
/// let func = CoordFunction1D::new(2048, 0.5, RefCoord::new(1.0, 400.0)).unwrap();
/// assert_eq!(func.pixel_to_world(3.0), 401.0);
///
/// assert!(CoordFunction1D::new(0, 0.5, RefCoord::new(1.0, 400.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordFunction1D {
    naxis: i64,
    delta: f64,
    ref_coord: RefCoord,
}

crate::define_entity_type!(CoordFunction1D, EntityType::CoordFunction1D);

impl CoordFunction1D {
    pub fn new(naxis: i64, delta: f64, ref_coord: RefCoord) -> Caom2Result<Self> {
        check_naxis(naxis)?;
        Ok(Self {
            naxis,
            delta,
            ref_coord,
        })
    }

    /// Length of the axis (unit: pix).
    pub fn naxis(&self) -> i64 {
        self.naxis
    }

    pub fn set_naxis(&mut self, naxis: i64) -> Caom2Result<()> {
        check_naxis(naxis)?;
        self.naxis = naxis;
        Ok(())
    }

    /// Step in world coordinates between pixels (unit: WCS/pix, days for a
    /// time axis).
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    pub fn ref_coord(&self) -> RefCoord {
        self.ref_coord
    }

    pub fn set_ref_coord(&mut self, ref_coord: RefCoord) {
        self.ref_coord = ref_coord;
    }

    /// World coordinate of a pixel coordinate.
    pub fn pixel_to_world(&self, pix: f64) -> f64 {
        self.ref_coord.val + (pix - self.ref_coord.pix) * self.delta
    }
}

fn check_naxis(naxis: i64) -> Caom2Result<()> {
    value_check(Some(naxis), 1, i64::MAX, "naxis", &Override::Disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Caom2Error;

    #[test]
    fn accessors() {
        let mut func = CoordFunction1D::new(100, 2.0, RefCoord::new(0.5, 10.0)).unwrap();
        assert_eq!(func.naxis(), 100);
        assert_eq!(func.delta(), 2.0);
        assert_eq!(func.ref_coord(), RefCoord::new(0.5, 10.0));

        func.set_delta(-1.0);
        func.set_ref_coord(RefCoord::new(1.0, 0.0));
        assert_eq!(func.pixel_to_world(11.0), -10.0);
    }

    #[test]
    fn naxis_must_be_positive() {
        let mut func = CoordFunction1D::new(1, 1.0, RefCoord::new(0.0, 0.0)).unwrap();
        let err = func.set_naxis(-3).unwrap_err();
        assert!(matches!(err, Caom2Error::RangeViolation { ref field, .. } if field == "naxis"));
        assert_eq!(func.naxis(), 1);

        assert!(matches!(
            CoordFunction1D::new(0, 1.0, RefCoord::new(0.0, 0.0)),
            Err(Caom2Error::RangeViolation { .. })
        ));
    }

    #[test]
    fn ref_coord_display() {
        assert_eq!(RefCoord::new(1.5, 2.0).to_string(), "(1.5, 2)");
        assert_eq!(RefCoord::TYPE.get(), EntityType::RefCoord);
    }
}
