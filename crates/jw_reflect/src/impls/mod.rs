//! [`Reflect`](crate::Reflect) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - primitives: `bool`, `()`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`,
//!   `f32`, `f64`
//! - text: `char`, `str`, `String`, `Cow<'_, str>`
//! - collections: `Vec<T>`, `[T; N]`, `VecDeque<T>`, `BTreeMap<K, V>`,
//!   `HashMap<K, V, S>`, `BTreeSet<T>`, `HashSet<T, S>`
//! - `Option<T>` (transparent: `Some` views as the inner value, `None` is
//!   the absent value)
//! - wrappers (transparent, identity-forwarding): `&T`, `Box<T>`, `Rc<T>`,
//!   `Arc<T>`, `Cell<Option<&T>>`
//! - time: `core::time::Duration`, `chrono::DateTime<Tz>`,
//!   `chrono::NaiveDate`, `chrono::NaiveDateTime`, `chrono::NaiveTime`,
//!   `chrono::TimeDelta`
//! - identifiers: `uuid::Uuid`
//! - decimals: `rust_decimal::Decimal`

// -----------------------------------------------------------------------------
// Modules

mod collection;
mod decimal;
mod option;
mod primitive;
mod text;
mod time;
mod uuid;
mod wrapper;
