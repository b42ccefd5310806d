//! Observations and their planes.

use super::{EntityType, Plane, Target};
use crate::error::Caom2Result;
use crate::typed::TypedOrderedDict;
use crate::validation::validate_path_component;

/// An observation within a collection, owning its planes in insertion order.
///
/// # Examples
///
/// ```
/// use caom2::core::{Observation, Plane};
///
/// let mut obs = Observation::new("CFHT", "2021-0042").unwrap();
/// obs.add_plane(Plane::new("raw").unwrap()).unwrap();
/// obs.add_plane(Plane::new("calibrated").unwrap()).unwrap();
///
/// let ids: Vec<&str> = obs.planes().keys().map(String::as_str).collect();
/// assert_eq!(ids, ["raw", "calibrated"]);
/// assert_eq!(obs.uri(), "caom:CFHT/2021-0042");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    collection: String,
    observation_id: String,
    target: Option<Target>,
    planes: TypedOrderedDict<Plane>,
}

crate::define_entity_type!(Observation, EntityType::Observation);

impl Observation {
    /// Creates an observation with no target and no planes.
    ///
    /// # Errors
    ///
    /// [`crate::Caom2Error::InvalidPathComponent`] if either identifier
    /// contains a space, a slash, a backslash or a percent sign.
    pub fn new(collection: impl Into<String>, observation_id: impl Into<String>) -> Caom2Result<Self> {
        let collection = collection.into();
        let observation_id = observation_id.into();
        validate_path_component("Observation", "collection", &collection)?;
        validate_path_component("Observation", "observation_id", &observation_id)?;
        Ok(Self {
            collection,
            observation_id,
            target: None,
            planes: TypedOrderedDict::empty(Plane::TYPE.get()),
        })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn observation_id(&self) -> &str {
        &self.observation_id
    }

    /// The observation URI, `caom:{collection}/{observation_id}`.
    pub fn uri(&self) -> String {
        format!("caom:{}/{}", self.collection, self.observation_id)
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut Target> {
        self.target.as_mut()
    }

    pub fn set_target(&mut self, target: Option<Target>) {
        self.target = target;
    }

    pub fn planes(&self) -> &TypedOrderedDict<Plane> {
        &self.planes
    }

    pub fn plane(&self, product_id: &str) -> Option<&Plane> {
        self.planes.get(product_id)
    }

    /// Adds a plane under its product id, replacing any plane with the same
    /// id in place.
    pub fn add_plane(&mut self, plane: Plane) -> Caom2Result<Option<Plane>> {
        log::debug!("{}: adding plane {}", self.uri(), plane.product_id());
        self.planes.add(plane)
    }

    /// Stores `plane` under `product_id`, which must match the plane's own
    /// product id.
    pub fn set_plane(&mut self, product_id: &str, plane: Plane) -> Caom2Result<Option<Plane>> {
        log::debug!("{}: setting plane {}", self.uri(), product_id);
        self.planes.set(product_id.to_string(), plane)
    }

    pub fn remove_plane(&mut self, product_id: &str) -> Option<Plane> {
        let removed = self.planes.remove(product_id);
        if removed.is_some() {
            log::debug!("{}: removed plane {}", self.uri(), product_id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Caom2Error;

    #[test]
    fn identifiers_are_path_components() {
        assert!(Observation::new("CFHT", "a/b").is_err());
        assert!(Observation::new("my collection", "x").is_err());
        assert!(Observation::new("CFHT", "x").is_ok());
    }

    #[test]
    fn planes_are_keyed_by_product_id() {
        let mut obs = Observation::new("CFHT", "x").unwrap();
        obs.add_plane(Plane::new("p1").unwrap()).unwrap();

        let err = obs.set_plane("p2", Plane::new("p1").unwrap()).unwrap_err();
        assert!(matches!(err, Caom2Error::KeyMismatch { .. }));
        assert_eq!(obs.planes().len(), 1);
        assert!(obs.plane("p1").is_some());

        assert!(obs.remove_plane("p1").is_some());
        assert!(obs.remove_plane("p1").is_none());
        assert!(obs.planes().is_empty());
    }

    #[test]
    fn target_is_optional() {
        let mut obs = Observation::new("CFHT", "x").unwrap();
        assert!(obs.target().is_none());

        obs.set_target(Some(Target::new("M31")));
        obs.target_mut().unwrap().set_moving(Some(false));
        assert_eq!(obs.target().unwrap().moving(), Some(false));
    }

    #[test]
    fn planes_declare_the_plane_type() {
        let obs = Observation::new("CFHT", "x").unwrap();
        assert_eq!(obs.planes().declared_type(), EntityType::Plane);
        assert_eq!(Observation::TYPE.of(&obs), EntityType::Observation);
    }
}
