//! Facsimile - array and string primitives rebuilt from first principles.
//!
//! Two independent value types with the familiar standard-library surface:
//!
//! - [`OrderedCollection`]: a growable ordered sequence with `push`, `pop`,
//!   `shift`, `unshift`, `splice`, `slice`, `index_of`, `includes`, `join`,
//!   `reverse`, `for_each`, `map`, `find`, `filter`, `sort` and `reduce`.
//! - [`TextBuffer`]: an immutable character sequence with `char_at`,
//!   `substring`, `slice`, `repeat`, `includes`, `concat`, `index_of`,
//!   `trim` and `split`.
//!
//! Index arguments accept anything convertible into a [`Position`], which
//! distinguishes an omitted argument from a non-numeric one. Out-of-range
//! input is normalized, never rejected; the one exception is `reduce` on an
//! empty collection without a seed.
//!
//! # Quick Start
//!
//! ```
//! use facsimile::{collection, Position, TextBuffer};
//!
//! let mut letters = collection!["a", "b", "c", "d", "e"];
//! let removed = letters.splice(-2, 1, []);
//! assert_eq!(removed, collection!["d"]);
//! assert_eq!(letters.join(Some("")), "abce");
//!
//! let text = TextBuffer::new("Codeable is awesome");
//! assert_eq!(text.slice(-7, Position::Omitted), "awesome");
//! assert_eq!(text.split(Some(" "), Some(2)), vec!["Codeable", "is"]);
//! ```

pub mod collection;
pub mod element;
pub mod error;
pub mod position;
mod search;
mod sort;
pub mod text;
pub mod value;

pub use collection::OrderedCollection;
pub use element::Element;
pub use error::CollectionError;
pub use position::Position;
pub use text::TextBuffer;
pub use value::Value;
