//! Pages
//!
//! One component per top-level view.

pub mod community;
pub mod crisis;
pub mod home;
pub mod profile;
pub mod resources;

pub use community::Community;
pub use crisis::Crisis;
pub use home::Home;
pub use profile::Profile;
pub use resources::Resources;
