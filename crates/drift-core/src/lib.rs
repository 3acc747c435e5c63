pub mod assets;
pub mod camera;
pub mod constants;
pub mod field;
pub mod lighting;
pub mod object;
pub mod pick;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use assets::*;
pub use camera::*;
pub use constants::*;
pub use field::*;
pub use lighting::*;
pub use object::*;
pub use pick::*;
