pub mod navbar;

pub use navbar::Nav;
