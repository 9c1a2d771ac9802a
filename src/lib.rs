pub mod unsplash;

pub use unsplash::{Client, Error, Photo, Result};
