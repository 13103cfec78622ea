pub mod image_io;
pub mod yuv_stream;
