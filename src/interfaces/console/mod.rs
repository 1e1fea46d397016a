//! Interactive console: line-oriented input and the text blocks printed back.

pub mod input;
pub mod render;
