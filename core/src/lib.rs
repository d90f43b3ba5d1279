pub mod db;
pub mod edamam;
pub mod models;
pub mod service;
