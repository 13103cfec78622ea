pub mod consts;
pub mod error;
pub mod filters;
pub mod frame;
pub mod geometry;
pub mod ingest;
pub mod io;
pub mod locate;
pub mod overlay;
pub mod pipeline;
pub mod quality;
