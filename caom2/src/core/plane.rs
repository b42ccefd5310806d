//! Planes: the data products of an observation.

use std::fmt;

use chrono::NaiveDateTime;

use super::EntityType;
use crate::conversions::date_to_ivoa;
use crate::error::Caom2Result;
use crate::typed::Keyed;
use crate::validation::{validate_path_component, value_check, Override};

/// Processing level of a plane's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalibrationLevel {
    RawInstrumental,
    RawStandard,
    Calibrated,
    Product,
}

impl CalibrationLevel {
    pub fn level(&self) -> i32 {
        match self {
            CalibrationLevel::RawInstrumental => 0,
            CalibrationLevel::RawStandard => 1,
            CalibrationLevel::Calibrated => 2,
            CalibrationLevel::Product => 3,
        }
    }

    /// Maps the numeric CAOM2 level to a variant.
    ///
    /// # Errors
    ///
    /// [`crate::Caom2Error::RangeViolation`] for levels outside `0..=3`.
    pub fn from_level(level: i32) -> Caom2Result<Self> {
        value_check(Some(level), 0, 3, "calibration_level", &Override::Disabled)?;
        Ok(match level {
            0 => CalibrationLevel::RawInstrumental,
            1 => CalibrationLevel::RawStandard,
            2 => CalibrationLevel::Calibrated,
            _ => CalibrationLevel::Product,
        })
    }
}

/// A data product of an observation, identified by its product id.
///
/// Planes are stored in an observation keyed by [`Plane::product_id`], so the
/// product id cannot be changed once the plane exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    product_id: String,
    calibration_level: Option<CalibrationLevel>,
    meta_release: Option<NaiveDateTime>,
}

crate::define_entity_type!(Plane, EntityType::Plane);

impl Plane {
    /// Creates a plane.
    ///
    /// # Errors
    ///
    /// [`crate::Caom2Error::InvalidPathComponent`] if the product id contains a
    /// space, a slash, a backslash or a percent sign.
    pub fn new(product_id: impl Into<String>) -> Caom2Result<Self> {
        let product_id = product_id.into();
        validate_path_component("Plane", "product_id", &product_id)?;
        Ok(Self {
            product_id,
            calibration_level: None,
            meta_release: None,
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn calibration_level(&self) -> Option<CalibrationLevel> {
        self.calibration_level
    }

    pub fn set_calibration_level(&mut self, level: Option<CalibrationLevel>) {
        self.calibration_level = level;
    }

    /// Date after which the plane's metadata is public.
    pub fn meta_release(&self) -> Option<NaiveDateTime> {
        self.meta_release
    }

    pub fn set_meta_release(&mut self, date: Option<NaiveDateTime>) {
        self.meta_release = date;
    }
}

impl Keyed for Plane {
    type Key = String;

    fn key(&self) -> String {
        self.product_id.clone()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane({})", self.product_id)?;
        if let Some(level) = self.calibration_level {
            write!(f, " level={}", level.level())?;
        }
        if let Some(release) = date_to_ivoa(self.meta_release) {
            write!(f, " meta_release={}", release)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::ivoa_to_date;
    use crate::error::Caom2Error;

    #[test]
    fn product_id_is_the_key() {
        let plane = Plane::new("productID1").unwrap();
        assert_eq!(plane.key(), "productID1");
        assert_eq!(Plane::TYPE.get(), EntityType::Plane);
    }

    #[test]
    fn invalid_product_id() {
        assert!(matches!(
            Plane::new("bad id"),
            Err(Caom2Error::InvalidPathComponent { .. })
        ));
    }

    #[test]
    fn calibration_levels() {
        assert_eq!(
            CalibrationLevel::from_level(2).unwrap(),
            CalibrationLevel::Calibrated
        );
        assert_eq!(CalibrationLevel::Product.level(), 3);
        assert!(matches!(
            CalibrationLevel::from_level(4),
            Err(Caom2Error::RangeViolation { .. })
        ));
    }

    #[test]
    fn display_includes_optional_attributes() {
        let mut plane = Plane::new("p1").unwrap();
        assert_eq!(plane.to_string(), "Plane(p1)");

        plane.set_calibration_level(Some(CalibrationLevel::RawStandard));
        plane.set_meta_release(ivoa_to_date(Some("2012-01-02T03:04:05.600")).unwrap());
        assert_eq!(
            plane.to_string(),
            "Plane(p1) level=1 meta_release=2012-01-02T03:04:05.600"
        );
    }
}
