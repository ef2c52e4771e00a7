use dyn_clone::DynClone;
use std::any::{type_name, Any, TypeId};

/// The type-erased capability behind an [`AnyValue`](crate::AnyValue).
///
/// A holder owns exactly one value whose concrete type is fixed when the
/// holder is created. Only the value may change afterwards, and only through
/// a same-type assignment.
pub(crate) trait Holder: DynClone {
    /// Produce an independently owned holder with the same type and an equal value
    fn duplicate(&self) -> Box<dyn Holder>;

    /// Overwrite `other`'s value with a clone of ours if both hold the same type.
    ///
    /// Returns `false` and leaves `other` untouched when the types differ.
    fn try_assign_into(&self, other: &mut dyn Holder) -> bool;

    fn held_type_id(&self) -> TypeId;

    fn held_type_name(&self) -> &'static str;

    /// The stored value, not the holder itself
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Move the stored value into `slot` if it is an `Option` of the held type.
    ///
    /// On a mismatch the holder is handed back untouched.
    fn move_into(self: Box<Self>, slot: &mut dyn Any) -> Result<(), Box<dyn Holder>>;
}

impl dyn Holder {
    /// Check if the contained value is exactly of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.held_type_id() == TypeId::of::<T>()
    }

    /// Get a reference to the contained value if it is exactly of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.as_any().downcast_ref::<T>()
    }

    /// Get a mutable reference to the contained value if it is exactly of type T
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// The concrete holder for a payload of type `T`
#[derive(Clone)]
pub(crate) struct Wrapper<T> {
    value: T,
}

impl<T: Clone + 'static> Wrapper<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone + 'static> Holder for Wrapper<T> {
    fn duplicate(&self) -> Box<dyn Holder> {
        dyn_clone::clone_box(self)
    }

    fn try_assign_into(&self, other: &mut dyn Holder) -> bool {
        if other.held_type_id() != TypeId::of::<T>() {
            return false;
        }
        match other.as_any_mut().downcast_mut::<T>() {
            Some(slot) => {
                slot.clone_from(&self.value);
                true
            }
            None => false,
        }
    }

    fn held_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn held_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.value
    }

    fn move_into(self: Box<Self>, slot: &mut dyn Any) -> Result<(), Box<dyn Holder>> {
        match slot.downcast_mut::<Option<T>>() {
            Some(slot) => {
                *slot = Some(self.value);
                Ok(())
            }
            None => Err(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed<T: Clone + 'static>(value: T) -> Box<dyn Holder> {
        Box::new(Wrapper::new(value))
    }

    #[test]
    fn test_downcast_exact_type_only() {
        let holder = boxed(42i32);

        assert_eq!(holder.downcast_ref::<i32>(), Some(&42));
        assert!(holder.downcast_ref::<i64>().is_none());
        assert!(holder.downcast_ref::<u32>().is_none());
        assert!(holder.downcast_ref::<Wrapper<i32>>().is_none());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = boxed(vec![1, 2, 3]);
        let mut copy = original.duplicate();

        copy.downcast_mut::<Vec<i32>>().unwrap().push(4);

        assert_eq!(original.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        assert_eq!(copy.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_try_assign_into_same_type() {
        let source = boxed("new".to_string());
        let mut target = boxed("old".to_string());

        assert!(source.try_assign_into(target.as_mut()));
        assert_eq!(target.downcast_ref::<String>().map(String::as_str), Some("new"));
        assert_eq!(source.downcast_ref::<String>().map(String::as_str), Some("new"));
    }

    #[test]
    fn test_try_assign_into_different_type_leaves_target() {
        let source = boxed(1u8);
        let mut target = boxed(1000u16);

        assert!(!source.try_assign_into(target.as_mut()));
        assert_eq!(target.downcast_ref::<u16>(), Some(&1000));
        assert!(target.downcast_ref::<u8>().is_none());
    }

    #[test]
    fn test_held_type_name() {
        let holder = boxed(String::from("named"));
        assert!(holder.held_type_name().ends_with("String"));
    }

    #[test]
    fn test_move_into_matching_slot() {
        let holder = boxed(7.5f64);
        let mut slot: Option<f64> = None;

        assert!(holder.move_into(&mut slot).is_ok());
        assert_eq!(slot, Some(7.5));
    }

    #[test]
    fn test_move_into_mismatch_returns_holder() {
        let holder = boxed((1, "one"));
        let mut slot: Option<i32> = None;

        let holder = match holder.move_into(&mut slot) {
            Ok(()) => panic!("i32 slot should not accept a tuple"),
            Err(holder) => holder,
        };
        assert!(slot.is_none());
        assert_eq!(holder.downcast_ref::<(i32, &str)>(), Some(&(1, "one")));
    }
}
