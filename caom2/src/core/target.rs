//! Observation targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EntityType;
use crate::config::TargetSettings;
use crate::error::{Caom2Error, Caom2Result};
use crate::typed::{PermittedTypes, TypedList, Value, ValueType};
use crate::validation::{value_check, Override};

/// Kind of target observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// A region of sky rather than a specific object.
    Field,
    Object,
}

impl TargetType {
    /// Value of this target type in the CAOM2 vocabulary.
    pub fn value(&self) -> &'static str {
        match self {
            TargetType::Field => "field",
            TargetType::Object => "object",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "field" => Some(TargetType::Field),
            "object" => Some(TargetType::Object),
            _ => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

fn keyword_types() -> PermittedTypes<ValueType> {
    PermittedTypes::single(ValueType::Str)
}

/// The target of an observation.
///
/// Only `name` is required. `keywords` is a typed list that accepts strings
/// only; `redshift` is range-checked whenever it is set.
///
/// # Examples
///
/// ```
/// use caom2::core::{Target, TargetType};
/// use caom2::typed::Value;
///
/// let mut target = Target::new("M31");
/// target.set_target_type(Some(TargetType::Object));
/// target.keywords_mut().append(Value::from("galaxy")).unwrap();
/// target.set_redshift(Some(-0.001)).unwrap();
///
/// assert_eq!(target.keywords().len(), 1);
/// assert!(target.set_redshift(Some(5000.0)).is_err());
/// assert_eq!(target.redshift(), Some(-0.001));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    name: String,
    target_type: Option<TargetType>,
    standard: Option<bool>,
    redshift: Option<f64>,
    keywords: TypedList<Value>,
    moving: Option<bool>,
}

crate::define_entity_type!(Target, EntityType::Target);

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: None,
            standard: None,
            redshift: None,
            keywords: TypedList::empty(keyword_types()),
            moving: None,
        }
    }

    /// Creates a target with every attribute set at once.
    ///
    /// # Errors
    ///
    /// Fails if the redshift is outside the default range or `keywords`
    /// permits anything other than strings.
    pub fn with_details(
        name: impl Into<String>,
        target_type: Option<TargetType>,
        standard: Option<bool>,
        redshift: Option<f64>,
        keywords: Option<TypedList<Value>>,
        moving: Option<bool>,
    ) -> Caom2Result<Self> {
        let mut target = Self::new(name);
        target.set_target_type(target_type);
        target.set_standard(standard);
        target.set_redshift(redshift)?;
        if let Some(keywords) = keywords {
            target.set_keywords(keywords)?;
        }
        target.set_moving(moving);
        Ok(target)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn target_type(&self) -> Option<TargetType> {
        self.target_type
    }

    pub fn set_target_type(&mut self, target_type: Option<TargetType>) {
        self.target_type = target_type;
    }

    /// Whether the target is a standard (e.g. a photometric standard star).
    pub fn standard(&self) -> Option<bool> {
        self.standard
    }

    pub fn set_standard(&mut self, standard: Option<bool>) {
        self.standard = standard;
    }

    pub fn redshift(&self) -> Option<f64> {
        self.redshift
    }

    /// Sets the redshift, checked against the default range.
    pub fn set_redshift(&mut self, redshift: Option<f64>) -> Caom2Result<()> {
        self.set_redshift_within(redshift, &TargetSettings::default())
    }

    /// Sets the redshift, checked against the configured range. `None` clears
    /// it.
    pub fn set_redshift_within(
        &mut self,
        redshift: Option<f64>,
        settings: &TargetSettings,
    ) -> Caom2Result<()> {
        value_check(
            redshift,
            settings.redshift_min,
            settings.redshift_max,
            "redshift",
            &Override::Absent,
        )?;
        self.redshift = redshift;
        Ok(())
    }

    pub fn keywords(&self) -> &TypedList<Value> {
        &self.keywords
    }

    pub fn keywords_mut(&mut self) -> &mut TypedList<Value> {
        &mut self.keywords
    }

    /// Replaces the keyword list. The new list must permit exactly `{str}`.
    pub fn set_keywords(&mut self, keywords: TypedList<Value>) -> Caom2Result<()> {
        let expected = keyword_types();
        if keywords.permitted() != &expected {
            return Err(Caom2Error::TypeMismatch {
                expected: expected.to_string(),
                alternative: String::new(),
                field: "keywords".to_string(),
                received: keywords.permitted().to_string(),
            });
        }
        self.keywords = keywords;
        Ok(())
    }

    /// Whether the target moves relative to the sky (e.g. a solar-system body).
    pub fn moving(&self) -> Option<bool> {
        self.moving
    }

    pub fn set_moving(&mut self, moving: Option<bool>) {
        self.moving = moving;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed::Typed;

    #[test]
    fn defaults() {
        let target = Target::new("myTarget");
        assert_eq!(target.name(), "myTarget");
        assert_eq!(target.target_type(), None);
        assert_eq!(target.standard(), None);
        assert_eq!(target.redshift(), None);
        assert_eq!(target.moving(), None);
        assert!(target.keywords().is_empty());
    }

    #[test]
    fn keywords_reject_non_strings() {
        let mut target = Target::new("t");
        assert!(target.keywords_mut().append(Value::from(1)).is_err());
        assert!(target.keywords().is_empty());
    }

    #[test]
    fn keyword_list_must_be_string_only() {
        let mut target = Target::new("t");
        let mixed = TypedList::empty(PermittedTypes::from([ValueType::Str, ValueType::Int]));
        let err = target.set_keywords(mixed).unwrap_err();
        assert!(matches!(err, Caom2Error::TypeMismatch { ref field, .. } if field == "keywords"));
    }

    #[test]
    fn keyword_list_permitting_nothing_is_rejected() {
        let mut target = Target::new("t");
        target.keywords_mut().append(Value::from("optical")).unwrap();

        let err = target
            .set_keywords(TypedList::empty(PermittedTypes::new([])))
            .unwrap_err();
        assert_eq!(
            err,
            Caom2Error::TypeMismatch {
                expected: "{str}".to_string(),
                alternative: String::new(),
                field: "keywords".to_string(),
                received: "{}".to_string(),
            }
        );
        assert_eq!(target.keywords().len(), 1);
        target.keywords_mut().append(Value::from("radio")).unwrap();
    }

    #[test]
    fn redshift_range() {
        let mut target = Target::new("t");
        target.set_redshift(Some(-0.5)).unwrap();
        target.set_redshift(Some(1200.0)).unwrap();
        assert!(matches!(
            target.set_redshift(Some(-0.6)),
            Err(Caom2Error::RangeViolation { .. })
        ));
        assert_eq!(target.redshift(), Some(1200.0));

        target.set_redshift(None).unwrap();
        assert_eq!(target.redshift(), None);
    }

    #[test]
    fn configured_redshift_range() {
        let settings = TargetSettings {
            redshift_min: 0.0,
            redshift_max: 2.0,
        };
        let mut target = Target::new("t");
        assert!(target.set_redshift_within(Some(3.0), &settings).is_err());
        target.set_redshift_within(Some(1.5), &settings).unwrap();
        assert_eq!(target.redshift(), Some(1.5));
    }

    #[test]
    fn type_is_a_class_property() {
        let target = Target::new("t");
        assert_eq!(Target::TYPE.get(), EntityType::Target);
        assert_eq!(Target::TYPE.of(&target), target.type_tag());
    }

    #[test]
    fn target_type_vocabulary() {
        assert_eq!(TargetType::from_value("field"), Some(TargetType::Field));
        assert_eq!(TargetType::Object.to_string(), "object");
        assert_eq!(TargetType::from_value("star"), None);
        assert_eq!(serde_json::to_string(&TargetType::Field).unwrap(), "\"field\"");
    }
}
