pub mod lists;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::lists::{Config, Lists};
    pub use crate::repository::{RefreshStats, Repository};
    pub use crate::shared::{Searchable, fuzzy, normalize};
}
