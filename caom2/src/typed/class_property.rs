//! Computed properties readable from a type without an instance.

use std::fmt;
use std::marker::PhantomData;

/// A stateless, computed property attached to the type `Owner`.
///
/// Declared as an associated constant, it is read from the type itself with
/// [`get`](Self::get) and yields the same value when read through an instance
/// with [`of`](Self::of).
///
/// # Examples
///
/// ```
/// use caom2::typed::ClassProperty;
///
/// struct Telescope;
///
/// fn default_site() -> &'static str {
///     "Mauna Kea"
/// }
///
/// impl Telescope {
///     pub const SITE: ClassProperty<Telescope, &'static str> =
///         ClassProperty::new("site", default_site);
/// }
///
/// assert_eq!(Telescope::SITE.get(), "Mauna Kea");
/// assert_eq!(Telescope::SITE.of(&Telescope), Telescope::SITE.get());
/// ```
pub struct ClassProperty<Owner: ?Sized, T> {
    name: &'static str,
    getter: fn() -> T,
    _owner: PhantomData<fn() -> *const Owner>,
}

impl<Owner: ?Sized, T> ClassProperty<Owner, T> {
    pub const fn new(name: &'static str, getter: fn() -> T) -> Self {
        Self {
            name,
            getter,
            _owner: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the property from the type.
    pub fn get(&self) -> T {
        (self.getter)()
    }

    /// Reads the property through an instance.
    pub fn of(&self, _instance: &Owner) -> T {
        self.get()
    }
}

impl<Owner: ?Sized, T> Clone for ClassProperty<Owner, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Owner: ?Sized, T> Copy for ClassProperty<Owner, T> {}

impl<Owner: ?Sized, T> fmt::Debug for ClassProperty<Owner, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassProperty")
            .field("owner", &std::any::type_name::<Owner>())
            .field("name", &self.name)
            .finish()
    }
}
