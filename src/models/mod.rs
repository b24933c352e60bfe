//! Data models for the Bookshelf server

pub mod book;
