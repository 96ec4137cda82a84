pub mod focus;
pub mod geom;
pub mod id;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod painter;
#[path = "primitives/style.rs"]
pub mod style;
pub mod theme;

#[path = "scene/frame.rs"]
pub mod frame;
#[path = "scene/tree.rs"]
pub mod tree;
