pub mod database;
pub mod envelope;
pub mod extract;
pub mod logfile;
