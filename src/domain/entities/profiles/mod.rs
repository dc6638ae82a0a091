pub mod profile;

pub use profile::{Education, Experience, Profile, Relation, Social};
