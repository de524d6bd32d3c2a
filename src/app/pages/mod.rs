pub mod landing;

pub use landing::App;
