//! Domain models for the storefront API.
//!
//! These are the validated domain objects that flow between repositories,
//! services, and route handlers. JSON field names are camelCase to match
//! the SPA client.

pub mod cart;
pub mod favorite;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{CartLine, CartLineWithProduct};
pub use favorite::{FavoriteMark, FavoriteWithProduct};
pub use product::{NewProduct, Product, ProductPatch};
pub use session::{CurrentUser, session_keys};
pub use user::{NewUser, User};
