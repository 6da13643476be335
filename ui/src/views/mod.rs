mod explorer;
pub use explorer::Explorer;
