use crate::error::AnyError;
use crate::holder::{Holder, Wrapper};
use std::any::{type_name, Any, TypeId};
use std::fmt;

/// A single-slot container for a value of any clonable type
///
/// `AnyValue` holds either nothing or exactly one value whose concrete type
/// is only known at the point it was stored. The value is recovered with an
/// exact-type check: asking for a different type, even a closely related one,
/// yields `None` (or an [`AnyError`] from the `Result`-returning accessors).
///
/// Cloning an `AnyValue` deep-clones the held value. Assigning a value of the
/// type already held overwrites it in place instead of allocating a new slot.
///
/// # Examples
///
/// ```
/// use sovran_any::AnyValue;
///
/// let mut value = AnyValue::from_value(5i32);
/// assert_eq!(value.cast_to::<i32>(), Some(&5));
/// assert_eq!(value.cast_to::<f64>(), None);
///
/// value.set("x".to_string());
/// assert_eq!(value.cast_to::<i32>(), None);
/// assert_eq!(value.cast_to::<String>().map(String::as_str), Some("x"));
/// ```
#[derive(Default)]
pub struct AnyValue {
    holder: Option<Box<dyn Holder>>,
}

impl AnyValue {
    /// Creates a new, empty AnyValue
    pub fn new() -> Self {
        Self { holder: None }
    }

    /// Creates an AnyValue holding `value`
    ///
    /// Passing another `AnyValue` takes over its contents rather than nesting
    /// one container inside the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_value(vec![1, 2, 3]);
    /// assert!(value.is::<Vec<i32>>());
    ///
    /// let copy = AnyValue::from_value(value.clone());
    /// assert_eq!(copy.cast_to::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    /// ```
    pub fn from_value<T: Clone + 'static>(mut value: T) -> Self {
        if let Some(container) = (&mut value as &mut dyn Any).downcast_mut::<AnyValue>() {
            return container.take();
        }
        Self {
            holder: Some(Box::new(Wrapper::new(value))),
        }
    }

    /// Creates an AnyValue holding the value returned by `f`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_fn(|| String::from("from a closure"));
    /// assert_eq!(value.cast_to::<String>().map(String::as_str), Some("from a closure"));
    /// ```
    pub fn from_fn<T, F>(f: F) -> Self
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        Self::from_value(f())
    }

    /// Returns true if no value is held
    pub fn is_empty(&self) -> bool {
        self.holder.is_none()
    }

    /// Returns true if a value of exactly type `T` is held
    pub fn is<T: 'static>(&self) -> bool {
        self.holder
            .as_deref()
            .is_some_and(|holder| holder.is_type::<T>())
    }

    /// The `TypeId` of the held value, or `None` when empty
    pub fn type_id(&self) -> Option<TypeId> {
        self.holder.as_deref().map(|holder| holder.held_type_id())
    }

    /// The type name of the held value, or `None` when empty
    ///
    /// The name is meant for diagnostics only; its exact format is not stable.
    pub fn type_name(&self) -> Option<&'static str> {
        self.holder.as_deref().map(|holder| holder.held_type_name())
    }

    /// Stores `value`, reusing the current slot when it already holds a `T`
    ///
    /// When the container is empty or holds some other type, the old value is
    /// dropped and a new slot is allocated. Passing another `AnyValue` copies
    /// its contents the way [`clone_from`](Clone::clone_from) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let mut value = AnyValue::new();
    /// value.set(1u8);
    /// value.set(2u8);
    /// assert_eq!(value.cast_to::<u8>(), Some(&2));
    ///
    /// value.set('z');
    /// assert!(value.cast_to::<u8>().is_none());
    /// assert_eq!(value.cast_to::<char>(), Some(&'z'));
    ///
    /// value.set(AnyValue::from_value(3u8));
    /// assert_eq!(value.cast_to::<u8>(), Some(&3));
    /// ```
    pub fn set<T: Clone + 'static>(&mut self, mut value: T) {
        if let Some(source) = (&mut value as &mut dyn Any).downcast_mut::<AnyValue>() {
            self.clone_from(source);
            return;
        }
        if let Some(slot) = self.cast_to_mut::<T>() {
            *slot = value;
            return;
        }
        self.holder = Some(Box::new(Wrapper::new(value)));
    }

    /// Copies the value held by `source` into this container
    ///
    /// Same-type values are assigned in place; otherwise this container's
    /// slot is replaced by a clone of the source's. Unlike
    /// [`clone_from`](Clone::clone_from), an empty source is refused and the
    /// destination is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AnyError::EmptySource` if `source` holds no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyError, AnyValue};
    ///
    /// let mut target = AnyValue::from_value(1i32);
    /// target.assign_from(&AnyValue::from_value(2i32))?;
    /// assert_eq!(target.cast_to::<i32>(), Some(&2));
    ///
    /// let result = target.assign_from(&AnyValue::new());
    /// assert_eq!(result, Err(AnyError::EmptySource));
    /// assert_eq!(target.cast_to::<i32>(), Some(&2));
    /// # Ok::<(), AnyError>(())
    /// ```
    pub fn assign_from(&mut self, source: &AnyValue) -> Result<(), AnyError> {
        let source = source.holder.as_deref().ok_or(AnyError::EmptySource)?;
        self.assign_holder(source);
        Ok(())
    }

    fn assign_holder(&mut self, source: &dyn Holder) {
        let assigned = match self.holder.as_deref_mut() {
            Some(target) => source.try_assign_into(target),
            None => false,
        };
        if !assigned {
            self.holder = Some(source.duplicate());
        }
    }

    /// Moves the held value out, leaving this container empty
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let mut source = AnyValue::from_value(3.5f64);
    /// let moved = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(moved.cast_to::<f64>(), Some(&3.5));
    /// ```
    pub fn take(&mut self) -> AnyValue {
        AnyValue {
            holder: self.holder.take(),
        }
    }

    /// Drops the held value, leaving this container empty
    pub fn reset(&mut self) {
        self.holder = None;
    }

    /// Returns a reference to the held value if it is exactly a `T`
    ///
    /// Returns `None` when the container is empty or holds any other type.
    pub fn cast_to<T: 'static>(&self) -> Option<&T> {
        self.holder.as_deref()?.downcast_ref::<T>()
    }

    /// Returns a mutable reference to the held value if it is exactly a `T`
    pub fn cast_to_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.holder.as_deref_mut()?.downcast_mut::<T>()
    }

    /// Retrieves a reference to the held value
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if no value is held
    /// - Returns `AnyError::TypeMismatch` if the held value is not exactly a `T`
    pub fn get<T: 'static>(&self) -> Result<&T, AnyError> {
        let holder = self.holder.as_deref().ok_or(AnyError::Empty)?;
        holder
            .downcast_ref::<T>()
            .ok_or_else(|| AnyError::TypeMismatch {
                expected: type_name::<T>(),
                found: holder.held_type_name(),
            })
    }

    /// Retrieves a mutable reference to the held value
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if no value is held
    /// - Returns `AnyError::TypeMismatch` if the held value is not exactly a `T`
    pub fn get_mut<T: 'static>(&mut self) -> Result<&mut T, AnyError> {
        let holder = self.holder.as_deref_mut().ok_or(AnyError::Empty)?;
        let found = holder.held_type_name();
        holder.downcast_mut::<T>().ok_or(AnyError::TypeMismatch {
            expected: type_name::<T>(),
            found,
        })
    }

    /// Runs `f` with read access to the held value
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyError, AnyValue};
    ///
    /// let value = AnyValue::from_value(vec![1, 2, 3]);
    /// let len = value.with(|v: &Vec<i32>| v.len())?;
    /// assert_eq!(len, 3);
    /// # Ok::<(), AnyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`get`](AnyValue::get).
    pub fn with<T, F, R>(&self, f: F) -> Result<R, AnyError>
    where
        T: 'static,
        F: FnOnce(&T) -> R,
    {
        self.get::<T>().map(f)
    }

    /// Runs `f` with write access to the held value
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyError, AnyValue};
    ///
    /// let mut value = AnyValue::from_value(vec![1, 2, 3]);
    /// value.with_mut(|v: &mut Vec<i32>| v.push(4))?;
    /// assert_eq!(value.cast_to::<Vec<i32>>(), Some(&vec![1, 2, 3, 4]));
    /// # Ok::<(), AnyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`get_mut`](AnyValue::get_mut).
    pub fn with_mut<T, F, R>(&mut self, f: F) -> Result<R, AnyError>
    where
        T: 'static,
        F: FnOnce(&mut T) -> R,
    {
        self.get_mut::<T>().map(f)
    }

    /// Consumes the container, returning the held value if it is exactly a `T`
    ///
    /// On a mismatch (or when empty) the container is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_value(String::from("owned"));
    /// let value = value.into_inner::<i32>().unwrap_err();
    /// assert_eq!(value.into_inner::<String>().unwrap(), "owned");
    /// ```
    pub fn into_inner<T: 'static>(self) -> Result<T, AnyValue> {
        let mut slot: Option<T> = None;
        if let Some(holder) = self.holder {
            if let Err(holder) = holder.move_into(&mut slot) {
                return Err(AnyValue {
                    holder: Some(holder),
                });
            }
        }
        slot.ok_or_else(AnyValue::new)
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            holder: self.holder.as_deref().map(|holder| holder.duplicate()),
        }
    }

    /// Copies `source` into `self`, reusing the current slot when both hold
    /// the same type. An empty source leaves `self` empty.
    fn clone_from(&mut self, source: &Self) {
        match source.holder.as_deref() {
            Some(source) => self.assign_holder(source),
            None => self.holder = None,
        }
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.type_name() {
            Some(name) => write!(f, "AnyValue({})", name),
            None => write!(f, "AnyValue(<empty>)"),
        }
    }
}
