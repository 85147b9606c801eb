//! Core domain types.

pub mod email;
pub mod id;
pub mod price;
pub mod quantity;
pub mod username;

pub use email::{Email, EmailError};
pub use id::{CartLineId, FavoriteId, ProductId, UserId};
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
pub use username::{Username, UsernameError};
