pub mod backup;
pub mod db;
pub mod seed;
