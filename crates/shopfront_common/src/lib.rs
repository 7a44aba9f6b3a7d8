pub mod menu;
pub mod query;
pub mod session;
pub mod shop;

pub use menu::{MenuAction, MenuDescriptor, NavLink, PRIMARY_LINKS, UserMenuItem, UserMenuVariant};
pub use query::{QueryState, ShopNameCache};
pub use session::{Role, Session};
pub use shop::{BRAND_FALLBACK, BRAND_LOADING, ShopEnvelope, ShopInfo};
