mod photo;

pub use photo::{Location, Photo, User};
