#![allow(clippy::module_inception)]

pub mod lexer;
pub mod reader;
