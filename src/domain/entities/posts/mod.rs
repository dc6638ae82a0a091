pub mod post;

pub use post::{Comment, Like, Post, Share};
