mod component;

pub use component::Toast;
