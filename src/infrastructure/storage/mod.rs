mod cloudinary_host;

pub use cloudinary_host::CloudinaryHost;
