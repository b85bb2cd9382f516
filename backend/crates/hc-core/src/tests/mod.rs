mod models;
mod stores;
