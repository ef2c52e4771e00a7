//! # sovran-any
//!
//! A single-slot, type-erased value container.
//!
//! `sovran-any` provides [`AnyValue`], a container that can hold one value of any
//! clonable type and hand it back only when asked for exactly that type. It behaves
//! like a regular value: cloning it deep-clones the contents, moving it moves the
//! contents, and assigning into it reuses the existing slot whenever the type already
//! matches.
//!
//! ## Key Features
//!
//! - **Type-safe**: Values are checked at runtime against their exact type
//! - **Value semantics**: `Clone`, `clone_from` and moves behave like the held type's own
//! - **In-place reuse**: Same-type assignment overwrites the value without reallocating
//! - **Flexible**: Supports any type that implements `Clone + 'static`
//! - **No macros**: Pure runtime solution without complex macro magic
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_any::AnyValue;
//!
//! // Start with an integer
//! let mut value = AnyValue::from_value(5i32);
//! assert_eq!(value.cast_to::<i32>(), Some(&5));
//!
//! // Asking for any other type yields None
//! assert_eq!(value.cast_to::<f64>(), None);
//! assert_eq!(value.cast_to::<i64>(), None);
//!
//! // Assigning a different type replaces the contents
//! value.set("x".to_string());
//! assert_eq!(value.cast_to::<i32>(), None);
//! assert_eq!(value.cast_to::<String>().map(String::as_str), Some("x"));
//! ```
//!
//! ### Copies Are Independent
//!
//! ```rust
//! use sovran_any::AnyValue;
//!
//! let mut a = AnyValue::from_value(5i32);
//! let b = a.clone();
//!
//! a.set(10i32);
//!
//! assert_eq!(a.cast_to::<i32>(), Some(&10));
//! assert_eq!(b.cast_to::<i32>(), Some(&5));
//! ```
//!
//! ### Moving Out Of A Container
//!
//! ```rust
//! use sovran_any::AnyValue;
//!
//! let mut source = AnyValue::from_value(vec!["a", "b"]);
//! let target = source.take();
//!
//! assert!(source.is_empty());
//! assert_eq!(target.cast_to::<Vec<&str>>(), Some(&vec!["a", "b"]));
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_any::{AnyError, AnyValue};
//!
//! let value = AnyValue::from_value(vec!["setting1", "setting2"]);
//!
//! // Try to get a value with the wrong type
//! match value.get::<String>() {
//!     Ok(text) => println!("Config: {}", text),
//!     Err(AnyError::Empty) => println!("Nothing stored"),
//!     Err(AnyError::TypeMismatch { expected, found }) => {
//!         println!("Wanted {}, but found {}", expected, found)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! // Typed access on an empty container
//! let empty = AnyValue::new();
//! assert_eq!(empty.get::<i32>(), Err(AnyError::Empty));
//!
//! // Strict assignment refuses an empty source
//! let mut target = value.clone();
//! assert_eq!(target.assign_from(&empty), Err(AnyError::EmptySource));
//! ```

mod error;
mod holder;
mod value;

pub use error::AnyError;
pub use value::AnyValue;
