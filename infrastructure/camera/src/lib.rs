pub mod file_camera;
pub mod unsupported;

pub use file_camera::FileCamera;
pub use unsupported::UnsupportedCamera;
